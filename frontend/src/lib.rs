mod api;
mod components;
pub mod config;
mod domain;
mod pages;
mod report;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HR Helper frontend (wasm)");

    // Runtime config loads from ./config.json in the background; API calls
    // made before it lands await the resolved base URL.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}

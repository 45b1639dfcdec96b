use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
mod config;
mod domain;
mod pages;
mod report;
mod router;
mod state;
#[cfg(test)]
mod test_support;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HR Helper frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}

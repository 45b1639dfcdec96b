//! Renders components to static HTML on the host, for tests that assert on
//! markup without a browser.

use leptos::*;

struct RuntimeGuard(RuntimeId);

impl RuntimeGuard {
    fn enter() -> Self {
        // Resource loads stay suppressed so pages render their fallback
        // content instead of awaiting fetches.
        leptos_reactive::suppress_resource_load(true);
        Self(create_runtime())
    }
}

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        self.0.dispose();
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _guard = RuntimeGuard::enter();
    view().into_view().render_to_string().to_string()
}

use crate::state::auth::{self, use_auth};
use leptos::*;

const NAV_LINK_CLASSES: &str =
    "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_hr = move || {
        auth.get()
            .session
            .as_ref()
            .map(|session| session.is_hr())
            .unwrap_or(false)
    };
    let on_logout = move |_| {
        set_menu_open.set(false);
        auth::logout(set_auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">"HR Helper"</h1>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <a href="/panel" class=NAV_LINK_CLASSES>"Mój panel"</a>
                            <Show when=is_hr>
                                <a href="/dashboard" class=NAV_LINK_CLASSES>"Pulpit"</a>
                                <a href="/profiles" class=NAV_LINK_CLASSES>"Pracownicy"</a>
                                <a href="/attendance" class=NAV_LINK_CLASSES>"Obecności"</a>
                                <a href="/leaves" class=NAV_LINK_CLASSES>"Urlopy"</a>
                                <a href="/payroll" class=NAV_LINK_CLASSES>"Płace"</a>
                            </Show>
                            <button on:click=on_logout class=NAV_LINK_CLASSES>
                                "Wyloguj"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">"Menu"</span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav id="mobile-nav" class="lg:hidden px-4 pb-3 space-y-1">
                    <a href="/panel" class=format!("block {NAV_LINK_CLASSES}")>"Mój panel"</a>
                    <Show when=is_hr>
                        <a href="/dashboard" class=format!("block {NAV_LINK_CLASSES}")>"Pulpit"</a>
                        <a href="/profiles" class=format!("block {NAV_LINK_CLASSES}")>"Pracownicy"</a>
                        <a href="/attendance" class=format!("block {NAV_LINK_CLASSES}")>"Obecności"</a>
                        <a href="/leaves" class=format!("block {NAV_LINK_CLASSES}")>"Urlopy"</a>
                        <a href="/payroll" class=format!("block {NAV_LINK_CLASSES}")>"Płace"</a>
                    </Show>
                    <button on:click=on_logout class=format!("block w-full text-left {NAV_LINK_CLASSES}")>
                        "Wyloguj"
                    </button>
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{helpers, ssr::render_to_string};

    #[test]
    fn hr_session_sees_admin_links() {
        let html = render_to_string(|| {
            helpers::provide_auth(Some(helpers::hr_session()));
            view! { <Header /> }
        });
        assert!(html.contains("Pracownicy"));
        assert!(html.contains("Płace"));
    }

    #[test]
    fn employee_session_sees_only_personal_panel() {
        let html = render_to_string(|| {
            helpers::provide_auth(Some(helpers::employee_session()));
            view! { <Header /> }
        });
        assert!(html.contains("Mój panel"));
        assert!(!html.contains("Pracownicy"));
    }
}

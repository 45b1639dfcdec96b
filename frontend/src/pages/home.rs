use leptos::*;

use crate::state::auth::use_auth;

/// Landing route: sends the visitor to their place based on the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        let target = match &state.session {
            None => "/login",
            Some(session) if session.is_hr() => "/dashboard",
            Some(_) => "/panel",
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! { <div class="min-h-screen bg-gray-50"></div> }
}

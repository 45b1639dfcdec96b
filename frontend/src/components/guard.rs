use crate::{components::common::LoadingSpinner, state::auth::use_auth};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || is_authenticated.get() && !is_loading.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Pages behind this guard are for the HR role; a signed-in employee is
/// bounced to their personal panel instead.
#[component]
pub fn RequireHr(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_hr = create_memo(move |_| {
        auth.get()
            .session
            .as_ref()
            .map(|session| session.is_hr())
            .unwrap_or(false)
    });
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = match &state.session {
            None => "/login",
            Some(session) if !session.is_hr() => "/panel",
            Some(_) => return,
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || is_hr.get() && !is_loading.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::test_support::{helpers, ssr::render_to_string};
    use leptos::*;

    use super::*;

    #[test]
    fn require_auth_renders_children_when_signed_in() {
        let html = render_to_string(|| {
            helpers::provide_auth(Some(helpers::employee_session()));
            view! { <RequireAuth>"chronione"</RequireAuth> }
        });
        assert!(html.contains("chronione"));
    }

    #[test]
    fn require_hr_hides_children_from_employee() {
        let html = render_to_string(|| {
            helpers::provide_auth(Some(helpers::employee_session()));
            view! { <RequireHr>"kadrowe"</RequireHr> }
        });
        assert!(!html.contains("kadrowe"));
    }

    #[test]
    fn require_hr_renders_children_for_hr() {
        let html = render_to_string(|| {
            helpers::provide_auth(Some(helpers::hr_session()));
            view! { <RequireHr>"kadrowe"</RequireHr> }
        });
        assert!(html.contains("kadrowe"));
    }
}

use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    components::common::{Button, ErrorMessage},
    state::auth::{self, use_auth, Session},
};
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { auth::login_request(request, &api, set_auth).await }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(Session { role, .. }) => {
                    let target = if role == "HR" { "/dashboard" } else { "/panel" };
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().set_href(target);
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 text-center">"HR Helper"</h1>
                    <p class="mt-1 text-sm text-gray-600 text-center">"Zaloguj się, aby kontynuować"</p>
                </div>
                <ErrorMessage error={Signal::derive(move || error.get())} />
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Nazwa użytkownika"</label>
                        <input
                            type="text"
                            class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                            prop:value={move || username.get()}
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Hasło"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                            prop:value={move || password.get()}
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <Button class="w-full" loading={pending} attr:type="submit">
                        "Zaloguj"
                    </Button>
                </form>
            </div>
        </div>
    }
}

use crate::{api::ApiError, domain::LeaveStatus};
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-12">
            <span class="h-8 w-8 animate-spin rounded-full border-4 border-indigo-600 border-t-transparent"></span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded my-2">
                {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="bg-green-50 border border-green-300 text-green-800 px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Colored pill for a leave status code; unknown codes render gray.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let (classes, label) = match LeaveStatus::from_code(&status) {
        Some(s @ LeaveStatus::Approved) => ("bg-green-100 text-green-800", s.label()),
        Some(s @ LeaveStatus::Rejected) => ("bg-red-100 text-red-800", s.label()),
        Some(s @ LeaveStatus::Pending) => ("bg-yellow-100 text-yellow-800", s.label()),
        None => ("bg-gray-100 text-gray-800", "Nieznany"),
    };
    view! {
        <span class=format!("inline-flex px-2 py-1 rounded-full text-xs font-medium {classes}")>
            {label}
        </span>
    }
}

#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed {class}"
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_message_renders_polish_text() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::Unauthorized));
            view! { <ErrorMessage error={error.into()} /> }
        });
        assert!(html.contains("Sesja wygasła"));
    }

    #[test]
    fn status_badge_maps_codes_to_labels() {
        let html = render_to_string(|| view! { <StatusBadge status="ZATWIERDZONE" /> });
        assert!(html.contains("Zatwierdzone"));
        assert!(html.contains("bg-green-100"));

        let unknown = render_to_string(|| view! { <StatusBadge status="???" /> });
        assert!(unknown.contains("Nieznany"));
    }
}

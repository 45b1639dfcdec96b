use leptos::*;

use crate::{
    api::{
        ApiClient, ApiError, LeaveQuery, LeaveRequestPayload, LeaveResponse,
        LEAVE_STATUS_APPROVED, LEAVE_STATUS_REJECTED,
    },
    components::{
        common::{Button, ErrorMessage, LoadingSpinner, StatusBadge, SuccessMessage},
        layout::Layout,
    },
    domain::LeaveStatus,
};

pub const LEAVE_KINDS: [&str; 11] = [
    "WYPOCZYNKOWY",
    "OKOLICZNOŚCIOWY",
    "SZKOLENIOWY",
    "CHOROBOWY",
    "BEZPŁATNY",
    "WYCHOWAWCZY",
    "MACIERZYŃSKI",
    "NA_POSZUKIWANIE_PRACY",
    "ODDANIE_KRWI",
    "SIŁA_WYŻSZA",
    "OPIEKUŃCZY",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeavesQuery {
    status: Option<LeaveStatus>,
    token: u32,
}

#[component]
fn LeaveForm(on_created: Callback<()>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let employees_api = api.clone();

    let employees_resource = create_resource(
        || (),
        move |_| {
            let api = employees_api.clone();
            async move { api.get_employees().await }
        },
    );
    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let employee_id = create_rw_signal(None::<i64>);
    let date_start = create_rw_signal(String::new());
    let date_end = create_rw_signal(String::new());
    let kind = create_rw_signal(LEAVE_KINDS[0].to_string());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |payload: &LeaveRequestPayload| {
        let api = api.clone();
        let payload = payload.clone();
        async move { api.request_leave(&payload).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    success.set(Some("Wniosek urlopowy został zapisany".into()));
                    on_created.call(());
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
        success.set(None);
        let Some(employee_id) = employee_id.get_untracked() else {
            error.set(Some(ApiError::Decode("wybierz pracownika".into())));
            return;
        };
        let start = date_start.get_untracked();
        let end = date_end.get_untracked();
        if start.is_empty() || end.is_empty() || start > end {
            error.set(Some(ApiError::Decode("niepoprawny zakres dat".into())));
            return;
        }
        submit_action.dispatch(LeaveRequestPayload {
            date_start: start,
            date_end: end,
            kind: kind.get_untracked(),
            employee_id,
        });
    };

    view! {
        <form class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3" on:submit=on_submit>
            <div>
                <label class="block text-sm font-medium text-gray-700">"Pracownik"</label>
                <select
                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                    on:change=move |ev| employee_id.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="">"-- wybierz --"</option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| {
                            view! {
                                <option value=employee.id.to_string()>{employee.full_name()}</option>
                            }
                        }
                    />
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700">"Od"</label>
                <input
                    type="date"
                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                    prop:value={move || date_start.get()}
                    on:input=move |ev| date_start.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700">"Do"</label>
                <input
                    type="date"
                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                    prop:value={move || date_end.get()}
                    on:input=move |ev| date_end.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700">"Rodzaj"</label>
                <select
                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    {LEAVE_KINDS
                        .iter()
                        .map(|code| view! { <option value=*code>{code.replace('_', " ")}</option> })
                        .collect_view()}
                </select>
            </div>
            <Button loading={pending} attr:type="submit">"Dodaj urlop"</Button>
            <div class="w-full">
                <ErrorMessage error={Signal::derive(move || error.get())} />
                <SuccessMessage message={Signal::derive(move || success.get())} />
            </div>
        </form>
    }
}

#[component]
pub fn LeavesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let list_api = api.clone();

    let query = create_rw_signal(LeavesQuery {
        status: Some(LeaveStatus::Pending),
        token: 0,
    });
    let reload = move || query.update(|q| q.token += 1);

    let leaves_resource = create_resource(
        move || query.get(),
        move |q| {
            let api = list_api.clone();
            async move {
                match q.status {
                    Some(status) => {
                        let filter = LeaveQuery {
                            status: Some(status.code().to_string()),
                            ..LeaveQuery::default()
                        };
                        api.get_leaves_by_params(&filter).await
                    }
                    None => api.get_all_leaves().await,
                }
            }
        },
    );
    let loading = leaves_resource.loading();
    let error = Signal::derive(move || leaves_resource.get().and_then(|result| result.err()));
    let leaves = Signal::derive(move || {
        leaves_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let action_error = create_rw_signal(None::<ApiError>);
    let status_action = create_action(move |(leave_id, new_status): &(i64, &'static str)| {
        let api = api.clone();
        let leave_id = *leave_id;
        let new_status = *new_status;
        async move { api.change_leave_status(leave_id, new_status).await }
    });
    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(_) => reload(),
                Err(err) => action_error.set(Some(err)),
            }
        }
    });

    let on_filter_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        query.update(|q| {
            q.status = LeaveStatus::from_code(&value);
            q.token += 1;
        });
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">"Urlopy"</h1>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Status"</label>
                        <select
                            class="mt-1 block border-gray-300 rounded-md shadow-sm"
                            on:change=on_filter_change
                        >
                            <option value={LeaveStatus::Pending.code()} selected>"Oczekujące"</option>
                            <option value={LeaveStatus::Approved.code()}>"Zatwierdzone"</option>
                            <option value={LeaveStatus::Rejected.code()}>"Odrzucone"</option>
                            <option value="">"Wszystkie"</option>
                        </select>
                    </div>
                </div>

                <LeaveForm on_created={Callback::new(move |_| reload())} />

                <ErrorMessage error={error} />
                <ErrorMessage error={Signal::derive(move || action_error.get())} />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>

                <div class="bg-white shadow overflow-hidden sm:rounded-md">
                    <ul class="divide-y divide-gray-200">
                        <For
                            each=move || leaves.get()
                            key=|leave| (leave.id, leave.status.clone())
                            children=move |leave: LeaveResponse| {
                                let is_pending = leave.status == crate::api::LEAVE_STATUS_PENDING;
                                let leave_id = leave.id;
                                let employee_name = leave
                                    .employee
                                    .as_ref()
                                    .map(|e| e.full_name())
                                    .unwrap_or_else(|| "-".into());
                                view! {
                                    <li class="px-6 py-4 flex items-center justify-between">
                                        <div>
                                            <div class="text-sm font-medium text-gray-900">{employee_name}</div>
                                            <div class="text-sm text-gray-500">
                                                {format!(
                                                    "{} - {} · {}",
                                                    leave.date_start,
                                                    leave.date_end,
                                                    leave.kind.replace('_', " ")
                                                )}
                                            </div>
                                        </div>
                                        <div class="flex items-center space-x-3">
                                            <StatusBadge status={leave.status.clone()} />
                                            <Show when=move || is_pending>
                                                <button
                                                    class="px-3 py-1 text-sm rounded bg-green-600 text-white hover:bg-green-500"
                                                    on:click=move |_| {
                                                        action_error.set(None);
                                                        status_action.dispatch((leave_id, LEAVE_STATUS_APPROVED));
                                                    }
                                                >
                                                    "Zatwierdź"
                                                </button>
                                                <button
                                                    class="px-3 py-1 text-sm rounded bg-red-600 text-white hover:bg-red-500"
                                                    on:click=move |_| {
                                                        action_error.set(None);
                                                        status_action.dispatch((leave_id, LEAVE_STATUS_REJECTED));
                                                    }
                                                >
                                                    "Odrzuć"
                                                </button>
                                            </Show>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </Layout>
    }
}

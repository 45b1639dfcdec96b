mod calendar;
mod view_model;

use leptos::*;

use crate::{
    components::{
        common::{Button, ErrorMessage, LoadingSpinner, SuccessMessage},
        layout::Layout,
    },
    pages::leaves::LEAVE_KINDS,
    state::auth::use_auth,
    utils::time::month_caption,
};
use calendar::MonthCalendar;
use view_model::{ClockEvent, LeaveDraft, PanelViewModel};

#[component]
fn ClockCard(vm: PanelViewModel) -> impl IntoView {
    let data = vm.data();
    let pending = vm.clock_action.pending();
    let break_taken = create_rw_signal(true);

    let open_id = create_memo(move |_| data.get().and_then(|d| d.open_attendance_id));
    let clocked_out = create_memo(move |_| {
        data.get().map(|d| d.clocked_out_today).unwrap_or(false)
    });

    let on_clock_in = move |_| {
        if pending.get_untracked() {
            return;
        }
        vm.clock_error.set(None);
        vm.clock_action.dispatch(ClockEvent::In);
    };
    let on_clock_out = move |_| {
        if pending.get_untracked() {
            return;
        }
        let Some(attendance_id) = open_id.get_untracked() else {
            return;
        };
        vm.clock_error.set(None);
        vm.clock_action.dispatch(ClockEvent::Out {
            attendance_id,
            break_taken: break_taken.get_untracked(),
        });
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-3">
            <h3 class="text-base font-semibold text-gray-900">"Rejestracja czasu pracy"</h3>
            <ErrorMessage error={Signal::derive(move || vm.clock_error.get())} />
            <Show
                when=move || !clocked_out.get()
                fallback=|| view! { <p class="text-sm text-gray-600">"Dzień pracy został już zakończony."</p> }
            >
                <Show
                    when=move || open_id.get().is_some()
                    fallback=move || {
                        view! {
                            <Button on:click=on_clock_in loading={pending}>
                                "Rozpocznij pracę"
                            </Button>
                        }
                    }
                >
                    <div class="flex items-center space-x-4">
                        <label class="flex items-center text-sm text-gray-700">
                            <input
                                type="checkbox"
                                class="mr-2 rounded border-gray-300"
                                prop:checked={move || break_taken.get()}
                                on:change=move |ev| break_taken.set(event_target_checked(&ev))
                            />
                            "Przerwa (15 min)"
                        </label>
                        <Button on:click=on_clock_out loading={pending}>
                            "Zakończ pracę"
                        </Button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn LeaveRequestCard(vm: PanelViewModel) -> impl IntoView {
    let pending = vm.leave_action.pending();
    let open = create_rw_signal(false);
    let date_start = create_rw_signal(String::new());
    let date_end = create_rw_signal(String::new());
    let kind = create_rw_signal(LEAVE_KINDS[0].to_string());
    let validation = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        validation.set(None);
        vm.leave_error.set(None);
        let start = date_start.get_untracked();
        let end = date_end.get_untracked();
        if start.is_empty() || end.is_empty() || start > end {
            validation.set(Some("Podaj poprawny zakres dat".into()));
            return;
        }
        vm.leave_action.dispatch(LeaveDraft {
            date_start: start,
            date_end: end,
            kind: kind.get_untracked(),
        });
        open.set(false);
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-base font-semibold text-gray-900">"Wniosek urlopowy"</h3>
                <button
                    class="text-sm text-indigo-600 hover:text-indigo-900"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "Anuluj" } else { "Złóż wniosek" }}
                </button>
            </div>
            <ErrorMessage error={Signal::derive(move || vm.leave_error.get())} />
            {move || {
                validation
                    .get()
                    .map(|message| {
                        view! { <p class="text-sm text-red-600">{message}</p> }.into_view()
                    })
                    .unwrap_or_else(|| ().into_view())
            }}
            <Show when=move || open.get()>
                <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
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
                    <Button loading={pending} attr:type="submit">"Wyślij"</Button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn SummaryCard(vm: PanelViewModel) -> impl IntoView {
    let data = vm.data();
    let entry = |label: &'static str, value: f64| {
        view! {
            <div class="flex justify-between text-sm py-1">
                <span class="text-gray-600">{label}</span>
                <span class="font-medium text-gray-900">{format!("{value:.2} h")}</span>
            </div>
        }
    };
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-base font-semibold text-gray-900">"Podsumowanie godzin"</h3>
                <div class="space-x-3 text-sm">
                    <button
                        class="text-indigo-600 hover:text-indigo-900"
                        on:click=move |_| vm.download_chronological_report()
                    >
                        "Raport chronologiczny"
                    </button>
                    <button
                        class="text-indigo-600 hover:text-indigo-900"
                        on:click=move |_| vm.download_summary_report()
                    >
                        "Raport sumaryczny"
                    </button>
                </div>
            </div>
            <SuccessMessage message={Signal::derive(move || vm.download_message.get())} />
            {move || {
                data.get()
                    .map(|d| {
                        let s = &d.summary;
                        view! {
                            <div class="divide-y divide-gray-100">
                                {entry("Normalne", s.regular)}
                                {entry("Nadgodziny dzienne", s.overtime_day)}
                                {entry("Nadgodziny nocne", s.overtime_night)}
                                {entry("Nadgodziny świąteczne", s.overtime_holiday)}
                                {entry("Urlopy", s.total()
                                    - s.regular
                                    - s.overtime_day
                                    - s.overtime_night
                                    - s.overtime_holiday)}
                                <div class="flex justify-between text-sm py-1 font-semibold">
                                    <span class="text-gray-900">"Suma"</span>
                                    <span class="text-gray-900">{format!("{:.2} h", s.total())}</span>
                                </div>
                            </div>
                        }
                        .into_view()
                    })
                    .unwrap_or_else(|| ().into_view())
            }}
        </div>
    }
}

#[component]
pub fn PanelPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let employee_id = auth.get_untracked().session.map(|s| s.employee_id);

    view! {
        <Layout>
            {match employee_id {
                Some(employee_id) => view! { <PanelContent employee_id=employee_id /> }.into_view(),
                None => ().into_view(),
            }}
        </Layout>
    }
}

#[component]
fn PanelContent(employee_id: i64) -> impl IntoView {
    let vm = PanelViewModel::new(employee_id);
    let data = vm.data();
    let loading = vm.data_resource.loading();
    let query = vm.query;

    let statuses = Signal::derive(move || data.get().map(|d| d.statuses).unwrap_or_default());
    let year = Signal::derive(move || query.get().year);
    let month = Signal::derive(move || query.get().month);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">
                        {move || {
                            data.get()
                                .map(|d| d.employee.full_name())
                                .unwrap_or_else(|| "Mój panel".into())
                        }}
                    </h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {move || {
                            data.get()
                                .map(|d| {
                                    format!(
                                        "Urlop: {} dni dostępnych, {} wykorzystanych",
                                        d.employee.leave_days_available,
                                        d.employee.leave_days_used
                                    )
                                })
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="flex items-center space-x-3">
                    <button
                        class="px-3 py-1 rounded border text-gray-700 hover:bg-gray-50"
                        on:click=move |_| vm.shift_month(-1)
                    >
                        "<"
                    </button>
                    <span class="text-sm font-medium text-gray-900">
                        {move || {
                            let q = query.get();
                            month_caption(q.year, q.month)
                        }}
                    </span>
                    <button
                        class="px-3 py-1 rounded border text-gray-700 hover:bg-gray-50"
                        on:click=move |_| vm.shift_month(1)
                    >
                        ">"
                    </button>
                </div>
            </div>

            <ErrorMessage error={vm.fetch_error()} />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <ClockCard vm=vm />
                <LeaveRequestCard vm=vm />
            </div>

            <MonthCalendar year=year month=month statuses=statuses />

            <SummaryCard vm=vm />
        </div>
    }
}

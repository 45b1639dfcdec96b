use chrono::Datelike;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, DepartmentCostRequest, PaymentRequest},
    components::{
        common::{Button, ErrorMessage, LoadingSpinner, SuccessMessage},
        layout::Layout,
    },
    utils::time::{today_in_app_tz, month_caption},
};

const COST_TYPES: [&str; 4] = ["WYNAGRODZENIA", "SZKOLENIA", "SPRZĘT", "INNE"];

#[component]
fn CostSection() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let list_api = api.clone();
    let total_api = api.clone();

    let reload = create_rw_signal(0u32);
    let today = today_in_app_tz();

    let costs_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.get_department_costs(None).await }
        },
    );
    let total_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = total_api.clone();
            let (year, month) = (today.year(), today.month());
            async move { api.get_costs_total_in_month(year, month).await }
        },
    );

    let costs = Signal::derive(move || {
        costs_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let costs_error = Signal::derive(move || costs_resource.get().and_then(|result| result.err()));
    let total = Signal::derive(move || total_resource.get().and_then(|result| result.ok()));

    let department = create_rw_signal(String::new());
    let date = create_rw_signal(today.format("%Y-%m-%d").to_string());
    let amount = create_rw_signal(String::new());
    let cost_type = create_rw_signal(COST_TYPES[0].to_string());
    let form_error = create_rw_signal(None::<ApiError>);
    let form_success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &DepartmentCostRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.add_department_cost(&request).await }
    });
    let pending = submit_action.pending();
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    form_success.set(Some("Koszt został zapisany".into()));
                    reload.update(|n| *n += 1);
                }
                Err(err) => form_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        form_error.set(None);
        form_success.set(None);
        let Ok(parsed_amount) = amount.get_untracked().parse::<f64>() else {
            form_error.set(Some(ApiError::Decode("niepoprawna kwota".into())));
            return;
        };
        if department.get_untracked().trim().is_empty() {
            form_error.set(Some(ApiError::Decode("podaj dział".into())));
            return;
        }
        submit_action.dispatch(DepartmentCostRequest {
            department: department.get_untracked(),
            date: date.get_untracked(),
            amount: parsed_amount,
            cost_type: cost_type.get_untracked(),
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900">"Koszty działów"</h2>
                <span class="text-sm text-gray-600">
                    {move || {
                        let caption = month_caption(today.year(), today.month());
                        match total.get() {
                            Some(total) => format!("Suma ({caption}): {total:.2} zł"),
                            None => format!("Suma ({caption}): ..."),
                        }
                    }}
                </span>
            </div>

            <form class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Dział"</label>
                    <input
                        type="text"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || department.get()}
                        on:input=move |ev| department.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Data"</label>
                    <input
                        type="date"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || date.get()}
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Kwota"</label>
                    <input
                        type="number"
                        step="0.01"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || amount.get()}
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Kategoria"</label>
                    <select
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        on:change=move |ev| cost_type.set(event_target_value(&ev))
                    >
                        {COST_TYPES
                            .iter()
                            .map(|code| view! { <option value=*code>{code.replace('_', " ")}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Button loading={pending} attr:type="submit">"Dodaj koszt"</Button>
                <div class="w-full">
                    <ErrorMessage error={Signal::derive(move || form_error.get())} />
                    <SuccessMessage message={Signal::derive(move || form_success.get())} />
                </div>
            </form>

            <ErrorMessage error={costs_error} />
            <div class="bg-white shadow overflow-hidden sm:rounded-md">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Dział"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Data"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Kategoria"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase">"Kwota"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        <For
                            each=move || costs.get()
                            key=|cost| cost.id
                            children=move |cost| {
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 text-sm text-gray-900">{cost.department.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-500">{cost.date.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-500">{cost.cost_type.replace('_', " ")}</td>
                                        <td class="px-6 py-4 text-sm text-right text-gray-900">{format!("{:.2} zł", cost.amount)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn PaymentSection() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let list_api = api.clone();

    let reload = create_rw_signal(0u32);
    let payments_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.get_payments(None).await }
        },
    );
    let payments = Signal::derive(move || {
        payments_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let payments_error =
        Signal::derive(move || payments_resource.get().and_then(|result| result.err()));

    let account = create_rw_signal(String::new());
    let amount = create_rw_signal(String::new());
    let due_date = create_rw_signal(String::new());
    let form_error = create_rw_signal(None::<ApiError>);
    let form_success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &PaymentRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.request_payment(&request).await }
    });
    let pending = submit_action.pending();
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    form_success.set(Some("Płatność została zlecona".into()));
                    reload.update(|n| *n += 1);
                }
                Err(err) => form_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        form_error.set(None);
        form_success.set(None);
        let Ok(parsed_amount) = amount.get_untracked().parse::<f64>() else {
            form_error.set(Some(ApiError::Decode("niepoprawna kwota".into())));
            return;
        };
        let account_number = account.get_untracked();
        if account_number.trim().is_empty() {
            form_error.set(Some(ApiError::Decode("podaj numer konta".into())));
            return;
        }
        submit_action.dispatch(PaymentRequest {
            bank_account_number: account_number,
            amount: parsed_amount,
            currency: "PLN".into(),
            status: "OCZEKUJĄCA".into(),
            due_date: due_date.get_untracked(),
            payment_date: today_in_app_tz().format("%Y-%m-%d").to_string(),
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900">"Płatności"</h2>

            <form class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Numer konta"</label>
                    <input
                        type="text"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || account.get()}
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Kwota"</label>
                    <input
                        type="number"
                        step="0.01"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || amount.get()}
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Termin"</label>
                    <input
                        type="date"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        prop:value={move || due_date.get()}
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </div>
                <Button loading={pending} attr:type="submit">"Zleć płatność"</Button>
                <div class="w-full">
                    <ErrorMessage error={Signal::derive(move || form_error.get())} />
                    <SuccessMessage message={Signal::derive(move || form_success.get())} />
                </div>
            </form>

            <ErrorMessage error={payments_error} />
            <div class="bg-white shadow overflow-hidden sm:rounded-md">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Konto"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Status"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Termin"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase">"Kwota"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        <For
                            each=move || payments.get()
                            key=|payment| payment.id
                            children=move |payment| {
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 text-sm text-gray-900">{payment.bank_account_number.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-500">{payment.status.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-500">{payment.due_date.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("{:.2} {}", payment.amount, payment.currency)}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn PayrollPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-10">
                <h1 class="text-2xl font-bold text-gray-900">"Płace i koszty"</h1>
                <CostSection />
                <PaymentSection />
            </div>
        </Layout>
    }
}

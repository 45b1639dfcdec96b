use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, LeaveQuery},
    components::{
        common::{Button, ErrorMessage, LoadingSpinner},
        layout::Layout,
    },
    domain::{self, AttendanceRecord},
    report::{day_status_map, DayStatus},
    utils::time::{month_bounds, today_in_app_tz},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RangeQuery {
    employee_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    token: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct EmployeeAttendance {
    records: Vec<AttendanceRecord>,
    statuses: BTreeMap<NaiveDate, DayStatus>,
}

/// Pulls the range's attendance and approved leaves together, so the status
/// column reflects leave overriding a recorded absence.
async fn fetch_range(api: &ApiClient, query: RangeQuery) -> Result<EmployeeAttendance, ApiError> {
    let leave_query = LeaveQuery {
        date_start: Some(query.from),
        date_end: Some(query.to),
        employee_id: Some(query.employee_id),
        ..LeaveQuery::default()
    };
    let (attendance, leaves) = futures::join!(
        api.get_attendance_by_employee_and_range(query.employee_id, query.from, query.to),
        api.get_leaves_by_params(&leave_query),
    );
    let records = domain::attendance_records(&attendance?);
    let leaves = domain::leave_records(&leaves?);
    let statuses = day_status_map(&records, &leaves);
    Ok(EmployeeAttendance { records, statuses })
}

/// Signal-backed state of the filter form above the table. Validation lives
/// here so the submit handler only moves a valid range into the query.
#[derive(Clone, Copy)]
struct RangeFormState {
    employee: RwSignal<Option<i64>>,
    from: RwSignal<String>,
    to: RwSignal<String>,
}

impl RangeFormState {
    fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            employee: create_rw_signal(None),
            from: create_rw_signal(from.format("%Y-%m-%d").to_string()),
            to: create_rw_signal(to.format("%Y-%m-%d").to_string()),
        }
    }

    fn to_range(&self) -> Result<(i64, NaiveDate, NaiveDate), String> {
        let employee_id = self
            .employee
            .get_untracked()
            .ok_or_else(|| "wybierz pracownika".to_string())?;
        let from = NaiveDate::parse_from_str(&self.from.get_untracked(), "%Y-%m-%d");
        let to = NaiveDate::parse_from_str(&self.to.get_untracked(), "%Y-%m-%d");
        let (Ok(from), Ok(to)) = (from, to) else {
            return Err("daty muszą mieć format RRRR-MM-DD".to_string());
        };
        if from > to {
            return Err("data początkowa jest po dacie końcowej".to_string());
        }
        Ok((employee_id, from, to))
    }
}

fn status_classes(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Present => "bg-green-100 text-green-800",
        DayStatus::Absent => "bg-red-100 text-red-800",
        DayStatus::OnLeave => "bg-blue-100 text-blue-800",
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
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

    let today = today_in_app_tz();
    let (first, last) = month_bounds(today).unwrap_or((today, today));
    let form = RangeFormState::new(first, last);
    let form_error = create_rw_signal(None::<ApiError>);
    let query = create_rw_signal(None::<RangeQuery>);

    let range_resource = create_resource(
        move || query.get(),
        move |q| {
            let api = api.clone();
            async move {
                match q {
                    Some(q) => fetch_range(&api, q).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    let loading = range_resource.loading();
    let fetch_error = Signal::derive(move || range_resource.get().and_then(|result| result.err()));
    let data = Signal::derive(move || range_resource.get().and_then(|result| result.ok()).flatten());

    let on_load = move |_| {
        form_error.set(None);
        match form.to_range() {
            Ok((employee_id, from, to)) => {
                query.update(|current| {
                    let token = current.map(|q| q.token + 1).unwrap_or(0);
                    *current = Some(RangeQuery {
                        employee_id,
                        from,
                        to,
                        token,
                    });
                });
            }
            Err(message) => form_error.set(Some(ApiError::Decode(message))),
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">"Obecności"</h1>

                <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Pracownik"</label>
                        <select
                            class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                            on:change=move |ev| {
                                form.employee.set(event_target_value(&ev).parse::<i64>().ok())
                            }
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
                            prop:value={move || form.from.get()}
                            on:input=move |ev| form.from.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Do"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                            prop:value={move || form.to.get()}
                            on:input=move |ev| form.to.set(event_target_value(&ev))
                        />
                    </div>
                    <Button on:click=on_load loading={loading}>"Pokaż"</Button>
                </div>

                <ErrorMessage error={Signal::derive(move || form_error.get())} />
                <ErrorMessage error={fetch_error} />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>

                {move || {
                    data.get()
                        .map(|data| {
                            let rows: Vec<_> = data
                                .statuses
                                .iter()
                                .map(|(date, status)| {
                                    let record = data
                                        .records
                                        .iter()
                                        .find(|record| record.date == *date)
                                        .copied();
                                    (*date, *status, record)
                                })
                                .collect();
                            view! {
                                <div class="bg-white shadow overflow-hidden sm:rounded-md">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Data"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Rozpoczęcie"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Zakończenie"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Przerwa"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200">
                                            {rows
                                                .into_iter()
                                                .map(|(date, status, record)| {
                                                    let start = record
                                                        .and_then(|r| r.start_time)
                                                        .map(|t| t.format("%H:%M").to_string())
                                                        .unwrap_or_else(|| "-".into());
                                                    let end = record
                                                        .and_then(|r| r.end_time)
                                                        .map(|t| t.format("%H:%M").to_string())
                                                        .unwrap_or_else(|| "-".into());
                                                    let break_taken = record
                                                        .map(|r| if r.break_taken { "Tak" } else { "Nie" })
                                                        .unwrap_or("-");
                                                    view! {
                                                        <tr>
                                                            <td class="px-6 py-4 text-sm text-gray-900">{date.format("%Y-%m-%d").to_string()}</td>
                                                            <td class="px-6 py-4 text-sm text-gray-500">{start}</td>
                                                            <td class="px-6 py-4 text-sm text-gray-500">{end}</td>
                                                            <td class="px-6 py-4 text-sm text-gray-500">{break_taken}</td>
                                                            <td class="px-6 py-4 text-sm">
                                                                <span class=format!(
                                                                    "inline-flex px-2 py-1 rounded-full text-xs font-medium {}",
                                                                    status_classes(status)
                                                                )>
                                                                    {status.label()}
                                                                </span>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                            .into_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn june() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
    }

    fn in_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn form_requires_an_employee() {
        in_runtime(|| {
            let (first, last) = june();
            let form = RangeFormState::new(first, last);
            assert_eq!(form.to_range(), Err("wybierz pracownika".to_string()));
        });
    }

    #[wasm_bindgen_test]
    fn form_rejects_malformed_dates() {
        in_runtime(|| {
            let (first, last) = june();
            let form = RangeFormState::new(first, last);
            form.employee.set(Some(3));
            form.from.set("01.06.2025".into());
            assert_eq!(
                form.to_range(),
                Err("daty muszą mieć format RRRR-MM-DD".to_string())
            );
        });
    }

    #[wasm_bindgen_test]
    fn form_rejects_inverted_range() {
        in_runtime(|| {
            let (first, last) = june();
            let form = RangeFormState::new(last, first);
            form.employee.set(Some(3));
            assert_eq!(
                form.to_range(),
                Err("data początkowa jest po dacie końcowej".to_string())
            );
        });
    }

    #[wasm_bindgen_test]
    fn form_yields_parsed_range() {
        in_runtime(|| {
            let (first, last) = june();
            let form = RangeFormState::new(first, last);
            form.employee.set(Some(3));
            assert_eq!(form.to_range(), Ok((3, first, last)));
        });
    }
}

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, LeaveQuery},
    components::{
        common::{Button, ErrorMessage, LoadingSpinner, SuccessMessage},
        layout::Layout,
    },
    domain,
    report::{
        chronological::FULL_DAY_HOURS, chronological_report, chronological_table,
        company_summary_table, csv_bundle, summary_table,
    },
    utils::{
        time::{month_bounds, month_caption, today_in_app_tz},
        trigger_csv_download,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonthQuery {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct DashboardData {
    employees: i64,
    new_employees: i64,
    leaves: i64,
    worked_hours: f64,
    costs_total: f64,
    leave_distribution: BTreeMap<String, f64>,
    cost_distribution: BTreeMap<String, f64>,
}

async fn fetch_dashboard(api: &ApiClient, query: MonthQuery) -> Result<DashboardData, ApiError> {
    let MonthQuery { year, month } = query;
    let (employees, new_employees, leaves, worked_hours, costs_total, leave_distribution, cost_distribution) = futures::join!(
        api.count_employees(),
        api.count_new_employees(year, month),
        api.get_leaves_count_in_month(year, month),
        api.get_worked_hours_in_month(year, month),
        api.get_costs_total_in_month(year, month),
        api.get_leave_distribution_in_month(year, month),
        api.get_cost_distribution_in_month(year, month),
    );
    Ok(DashboardData {
        employees: employees?,
        new_employees: new_employees?,
        leaves: leaves?,
        worked_hours: worked_hours?,
        costs_total: costs_total?,
        leave_distribution: leave_distribution?,
        cost_distribution: cost_distribution?,
    })
}

/// Pay-period anchor dates the summary endpoints expect alongside the month.
fn pay_period_days(year: i32, month: u32) -> Vec<String> {
    vec![
        format!("{year}-{month:02}-01"),
        format!("{year}-{month:02}-15"),
    ]
}

fn month_range(query: MonthQuery) -> Result<(NaiveDate, NaiveDate), ApiError> {
    NaiveDate::from_ymd_opt(query.year, query.month, 1)
        .and_then(month_bounds)
        .ok_or_else(|| ApiError::Decode(format!("invalid month {}-{}", query.year, query.month)))
}

/// Which of the three company-wide exports to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompanyReport {
    Summary,
    EmployeePack,
    Chronological,
}

impl CompanyReport {
    fn filename(self, query: MonthQuery) -> String {
        let stem = match self {
            Self::Summary => "raport_sumaryczny_ogolny",
            Self::EmployeePack => "raport_zbiorczy",
            Self::Chronological => "raport_chronologiczny_wszyscy",
        };
        format!("{stem}_{}_{:02}.csv", query.year, query.month)
    }
}

async fn company_summary_csv(api: &ApiClient, query: MonthQuery) -> Result<String, ApiError> {
    let days = pay_period_days(query.year, query.month);
    let summary = api.get_monthly_summary(query.year, query.month, &days).await?;
    Ok(company_summary_table(&summary, query.year, query.month).to_csv())
}

/// One summary table per employee in a single download. An employee whose
/// summary fails to load is logged and left out, the rest still export.
async fn employee_pack_csv(api: &ApiClient, query: MonthQuery) -> Result<String, ApiError> {
    let employees = api.get_employees().await?;
    let days = pay_period_days(query.year, query.month);
    let mut tables = Vec::with_capacity(employees.len());
    for employee in employees {
        match api
            .get_personal_summary(employee.id, query.year, query.month, &days)
            .await
        {
            Ok(summary) => {
                tables.push(summary_table(
                    &employee.full_name(),
                    &summary,
                    query.year,
                    query.month,
                ));
            }
            Err(err) => {
                log::error!("summary for {} failed: {err}", employee.full_name());
            }
        }
    }
    Ok(csv_bundle(&tables))
}

/// The full chronological report for every employee, one table each.
async fn company_chronological_csv(api: &ApiClient, query: MonthQuery) -> Result<String, ApiError> {
    let (first, last) = month_range(query)?;
    let employees = api.get_employees().await?;
    let mut tables = Vec::with_capacity(employees.len());
    for employee in employees {
        let leave_query = LeaveQuery {
            date_start: Some(first),
            date_end: Some(last),
            employee_id: Some(employee.id),
            ..LeaveQuery::default()
        };
        let (attendance, leaves) = futures::join!(
            api.get_attendance_by_employee_and_range(employee.id, first, last),
            api.get_leaves_by_params(&leave_query),
        );
        let attendance = domain::attendance_records(&attendance?);
        let leaves = domain::leave_records(&leaves?);
        let rows = chronological_report(&attendance, &leaves, FULL_DAY_HOURS);
        tables.push(chronological_table(
            &employee.full_name(),
            &rows,
            query.year,
            query.month,
        ));
    }
    Ok(csv_bundle(&tables))
}

#[component]
fn ReportsCard(query: RwSignal<MonthQuery>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let export_error = create_rw_signal(None::<ApiError>);
    let export_message = create_rw_signal(None::<String>);

    let export_action = create_action(move |kind: &CompanyReport| {
        let api = api.clone();
        let kind = *kind;
        let q = query.get_untracked();
        async move {
            let csv = match kind {
                CompanyReport::Summary => company_summary_csv(&api, q).await?,
                CompanyReport::EmployeePack => employee_pack_csv(&api, q).await?,
                CompanyReport::Chronological => company_chronological_csv(&api, q).await?,
            };
            Ok::<(String, String), ApiError>((kind.filename(q), csv))
        }
    });
    let pending = export_action.pending();

    create_effect(move |_| {
        if let Some(result) = export_action.value().get() {
            match result {
                Ok((filename, csv)) => {
                    export_error.set(None);
                    match trigger_csv_download(&filename, &csv) {
                        Ok(()) => export_message.set(Some(format!("Pobrano {filename}"))),
                        Err(err) => {
                            log::error!("report download failed: {err}");
                            export_message
                                .set(Some(format!("Nie udało się pobrać raportu: {err}")));
                        }
                    }
                }
                Err(err) => {
                    export_message.set(None);
                    export_error.set(Some(err));
                }
            }
        }
    });

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-base font-semibold text-gray-900 mb-3">"Raporty"</h3>
            <div class="flex flex-wrap gap-3">
                <Button
                    loading={pending}
                    on:click=move |_| export_action.dispatch(CompanyReport::Summary)
                >
                    "Stwórz raport sumaryczny"
                </Button>
                <Button
                    loading={pending}
                    on:click=move |_| export_action.dispatch(CompanyReport::EmployeePack)
                >
                    "Stwórz raport osobowy"
                </Button>
                <Button
                    loading={pending}
                    on:click=move |_| export_action.dispatch(CompanyReport::Chronological)
                >
                    "Stwórz raport chronologiczny"
                </Button>
            </div>
            <SuccessMessage message={Signal::derive(move || export_message.get())} />
            <ErrorMessage error={Signal::derive(move || export_error.get())} />
        </div>
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="text-sm font-medium text-gray-500">{label}</div>
            <div class="mt-1 text-3xl font-semibold text-gray-900">{value}</div>
        </div>
    }
}

#[component]
fn DistributionList(
    #[prop(into)] title: String,
    #[prop(into)] entries: Signal<BTreeMap<String, f64>>,
    #[prop(into)] unit: String,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-base font-semibold text-gray-900 mb-3">{title}</h3>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="text-sm text-gray-500">"Brak danych za wybrany okres."</p> }
            >
                <ul class="divide-y divide-gray-200">
                    <For
                        each={move || entries.get().into_iter().collect::<Vec<_>>()}
                        key=|(name, _)| name.clone()
                        children={
                            let unit = unit.clone();
                            move |(name, value)| {
                                view! {
                                    <li class="flex justify-between py-2 text-sm">
                                        <span class="text-gray-700">{name.replace('_', " ")}</span>
                                        <span class="font-medium text-gray-900">{format!("{value:.2} {unit}")}</span>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let today = today_in_app_tz();
    let query = create_rw_signal(MonthQuery {
        year: today.year(),
        month: today.month(),
    });

    let data_resource = create_resource(
        move || query.get(),
        move |q| {
            let api = api.clone();
            async move { fetch_dashboard(&api, q).await }
        },
    );

    let loading = data_resource.loading();
    let error = Signal::derive(move || data_resource.get().and_then(|result| result.err()));
    let data = Signal::derive(move || data_resource.get().and_then(|result| result.ok()));
    let leave_distribution = Signal::derive(move || {
        data.get().map(|d| d.leave_distribution).unwrap_or_default()
    });
    let cost_distribution = Signal::derive(move || {
        data.get().map(|d| d.cost_distribution).unwrap_or_default()
    });

    let shift_month = move |delta: i32| {
        query.update(|q| {
            let zero_based = q.year * 12 + q.month as i32 - 1 + delta;
            q.year = zero_based.div_euclid(12);
            q.month = (zero_based.rem_euclid(12) + 1) as u32;
        });
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">"Pulpit"</h1>
                    <div class="flex items-center space-x-3">
                        <button
                            class="px-3 py-1 rounded border text-gray-700 hover:bg-gray-50"
                            on:click=move |_| shift_month(-1)
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
                            on:click=move |_| shift_month(1)
                        >
                            ">"
                        </button>
                    </div>
                </div>

                <ErrorMessage error={error} />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>

                <Show when=move || data.get().is_some()>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4">
                        {move || {
                            data.get()
                                .map(|d| {
                                    view! {
                                        <StatCard label="Pracownicy" value={d.employees.to_string()} />
                                        <StatCard label="Nowi pracownicy" value={d.new_employees.to_string()} />
                                        <StatCard label="Urlopy" value={d.leaves.to_string()} />
                                        <StatCard label="Przepracowane godziny" value={format!("{:.0}", d.worked_hours)} />
                                        <StatCard label="Koszty" value={format!("{:.2} zł", d.costs_total)} />
                                    }
                                    .into_view()
                                })
                                .unwrap_or_else(|| ().into_view())
                        }}
                    </div>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                        <DistributionList
                            title="Urlopy według rodzaju"
                            entries={leave_distribution}
                            unit="dni"
                        />
                        <DistributionList
                            title="Koszty według kategorii"
                            entries={cost_distribution}
                            unit="zł"
                        />
                    </div>
                </Show>

                <ReportsCard query={query} />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pay_period_days_pad_the_month() {
        assert_eq!(
            pay_period_days(2025, 6),
            vec!["2025-06-01".to_string(), "2025-06-15".to_string()]
        );
    }

    #[test]
    fn report_filenames_carry_period() {
        let query = MonthQuery {
            year: 2025,
            month: 6,
        };
        assert_eq!(
            CompanyReport::Summary.filename(query),
            "raport_sumaryczny_ogolny_2025_06.csv"
        );
        assert_eq!(
            CompanyReport::Chronological.filename(query),
            "raport_chronologiczny_wszyscy_2025_06.csv"
        );
    }

    #[test]
    fn dashboard_offers_company_report_exports() {
        let html = render_to_string(|| view! { <DashboardPage /> });
        assert!(html.contains("Stwórz raport sumaryczny"));
        assert!(html.contains("Stwórz raport osobowy"));
        assert!(html.contains("Stwórz raport chronologiczny"));
    }
}

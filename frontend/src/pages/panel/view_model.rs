use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::{
    api::{
        ApiClient, ApiError, AttendanceTimeRequest, EmployeeBasicResponse, HoursSummary,
        LeaveQuery, LeaveRequestPayload,
    },
    domain::{self, AttendanceRecord, LeaveRecord},
    report::{
        self, chronological::FULL_DAY_HOURS, chronological_report, chronological_table,
        day_status_map, summary_table, DayStatus,
    },
    utils::{
        time::{month_bounds, now_in_app_tz, today_in_app_tz},
        trigger_csv_download,
    },
};

/// Resource key for the panel. The token makes every explicit reload a fresh
/// key, so a response from a superseded month can never land in newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelQuery {
    pub year: i32,
    pub month: u32,
    pub token: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelData {
    pub employee: EmployeeBasicResponse,
    pub attendance: Vec<AttendanceRecord>,
    pub leaves: Vec<LeaveRecord>,
    pub summary: HoursSummary,
    pub statuses: BTreeMap<NaiveDate, DayStatus>,
    /// Open attendance record for today, if the employee already clocked in.
    pub open_attendance_id: Option<i64>,
    pub clocked_out_today: bool,
}

async fn fetch_panel(
    api: &ApiClient,
    employee_id: i64,
    query: PanelQuery,
) -> Result<PanelData, ApiError> {
    let anchor = NaiveDate::from_ymd_opt(query.year, query.month, 1)
        .ok_or_else(|| ApiError::Decode(format!("invalid month {}-{}", query.year, query.month)))?;
    let (first, last) = month_bounds(anchor)
        .ok_or_else(|| ApiError::Decode(format!("invalid month {}-{}", query.year, query.month)))?;

    let leave_query = LeaveQuery {
        date_start: Some(first),
        date_end: Some(last),
        employee_id: Some(employee_id),
        ..LeaveQuery::default()
    };
    let (employee, raw_attendance, raw_leaves) = futures::join!(
        api.get_employee(employee_id),
        api.get_attendance_by_employee_and_range(employee_id, first, last),
        api.get_leaves_by_params(&leave_query),
    );
    let employee = employee?;
    let raw_attendance = raw_attendance?;
    let leaves = domain::leave_records(&raw_leaves?);
    let attendance = domain::attendance_records(&raw_attendance);

    // The backend buckets leave hours per category; it needs the month's
    // approved leave dates to do so.
    let leave_days: Vec<String> = leaves
        .iter()
        .filter(|leave| leave.is_approved())
        .flat_map(|leave| leave.dates())
        .filter(|date| *date >= first && *date <= last)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect();
    let summary = api
        .get_personal_summary(employee_id, query.year, query.month, &leave_days)
        .await?;

    let statuses = day_status_map(&attendance, &leaves);

    let today = today_in_app_tz();
    let today_record = raw_attendance
        .iter()
        .find(|record| domain::parse_date(&record.date, "attendance").ok() == Some(today));
    let open_attendance_id = today_record
        .filter(|record| record.end_time.is_none())
        .map(|record| record.id);
    let clocked_out_today = today_record
        .map(|record| record.end_time.is_some())
        .unwrap_or(false);

    Ok(PanelData {
        employee,
        attendance,
        leaves,
        summary,
        statuses,
        open_attendance_id,
        clocked_out_today,
    })
}

#[derive(Debug, Clone)]
pub enum ClockEvent {
    In,
    Out { attendance_id: i64, break_taken: bool },
}

#[derive(Debug, Clone)]
pub struct LeaveDraft {
    pub date_start: String,
    pub date_end: String,
    pub kind: String,
}

#[derive(Clone, Copy)]
pub struct PanelViewModel {
    pub employee_id: i64,
    pub query: RwSignal<PanelQuery>,
    pub data_resource: Resource<(i64, PanelQuery), Result<PanelData, ApiError>>,
    pub clock_action: Action<ClockEvent, Result<(), ApiError>>,
    pub clock_error: RwSignal<Option<ApiError>>,
    pub leave_action: Action<LeaveDraft, Result<(), ApiError>>,
    pub leave_error: RwSignal<Option<ApiError>>,
    pub download_message: RwSignal<Option<String>>,
}

impl PanelViewModel {
    pub fn new(employee_id: i64) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let today = today_in_app_tz();
        let query = create_rw_signal(PanelQuery {
            year: today.year(),
            month: today.month(),
            token: 0,
        });

        let fetch_api = api.clone();
        let data_resource = create_resource(
            move || (employee_id, query.get()),
            move |(employee_id, q)| {
                let api = fetch_api.clone();
                async move { fetch_panel(&api, employee_id, q).await }
            },
        );

        let clock_error = create_rw_signal(None::<ApiError>);
        let clock_api = api.clone();
        let clock_action = create_action(move |event: &ClockEvent| {
            let api = clock_api.clone();
            let event = event.clone();
            async move {
                let now = now_in_app_tz();
                match event {
                    ClockEvent::In => {
                        api.initialize_attendance(&AttendanceTimeRequest {
                            start_time: now.format("%H:%M:%S").to_string(),
                            end_time: None,
                            date: now.date_naive().format("%Y-%m-%d").to_string(),
                            employee_id,
                        })
                        .await?;
                    }
                    ClockEvent::Out {
                        attendance_id,
                        break_taken,
                    } => {
                        api.finalize_attendance(
                            attendance_id,
                            &now.format("%H:%M:%S").to_string(),
                            break_taken,
                        )
                        .await?;
                    }
                }
                Ok(())
            }
        });

        let leave_error = create_rw_signal(None::<ApiError>);
        let leave_api = api.clone();
        let leave_action = create_action(move |draft: &LeaveDraft| {
            let api = leave_api.clone();
            let draft = draft.clone();
            async move {
                api.request_leave(&LeaveRequestPayload {
                    date_start: draft.date_start,
                    date_end: draft.date_end,
                    kind: draft.kind,
                    employee_id,
                })
                .await?;
                Ok(())
            }
        });

        let vm = Self {
            employee_id,
            query,
            data_resource,
            clock_action,
            clock_error,
            leave_action,
            leave_error,
            download_message: create_rw_signal(None),
        };

        // A completed clock or leave action invalidates the month's data.
        create_effect(move |_| {
            if let Some(result) = clock_action.value().get() {
                match result {
                    Ok(()) => vm.reload(),
                    Err(err) => clock_error.set(Some(err)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = leave_action.value().get() {
                match result {
                    Ok(()) => vm.reload(),
                    Err(err) => leave_error.set(Some(err)),
                }
            }
        });

        vm
    }

    pub fn reload(&self) {
        self.query.update(|q| q.token += 1);
    }

    pub fn shift_month(&self, delta: i32) {
        self.query.update(|q| {
            let zero_based = q.year * 12 + q.month as i32 - 1 + delta;
            q.year = zero_based.div_euclid(12);
            q.month = (zero_based.rem_euclid(12) + 1) as u32;
            q.token += 1;
        });
    }

    pub fn data(&self) -> Signal<Option<PanelData>> {
        let resource = self.data_resource;
        Signal::derive(move || resource.get().and_then(|result| result.ok()))
    }

    pub fn fetch_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.data_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    fn with_data(&self, f: impl FnOnce(&PanelData)) {
        let resource = self.data_resource;
        if let Some(Ok(data)) = untrack(move || resource.get()) {
            f(&data);
        }
    }

    pub fn download_chronological_report(&self) {
        let message = self.download_message;
        let query = self.query.get_untracked();
        self.with_data(|data| {
            let rows = chronological_report(&data.attendance, &data.leaves, FULL_DAY_HOURS);
            let table = chronological_table(
                &data.employee.full_name(),
                &rows,
                query.year,
                query.month,
            );
            deliver_report(
                &table,
                &format!("raport_chronologiczny_{}_{:02}.csv", query.year, query.month),
                message,
            );
        });
    }

    pub fn download_summary_report(&self) {
        let message = self.download_message;
        let query = self.query.get_untracked();
        self.with_data(|data| {
            let table = summary_table(
                &data.employee.full_name(),
                &data.summary,
                query.year,
                query.month,
            );
            deliver_report(
                &table,
                &format!("raport_sumaryczny_{}_{:02}.csv", query.year, query.month),
                message,
            );
        });
    }
}

fn deliver_report(table: &report::ReportTable, filename: &str, message: RwSignal<Option<String>>) {
    match trigger_csv_download(filename, &table.to_csv()) {
        Ok(()) => message.set(Some(format!("Pobrano {filename}"))),
        Err(err) => {
            log::error!("report download failed: {err}");
            message.set(Some(format!("Nie udało się pobrać raportu: {err}")));
        }
    }
}

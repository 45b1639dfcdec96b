//! Attendance/leave reconciliation and report assembly.

pub mod chronological;
pub mod day_status;
pub mod holidays;
pub mod table;

pub use chronological::{chronological_report, DailyReportRow, DayCategory, OvertimeCategory};
pub use day_status::{day_status_map, DayStatus};
pub use table::{chronological_table, company_summary_table, csv_bundle, summary_table, ReportTable};

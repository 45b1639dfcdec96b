//! Chronological monthly report: one row per day present in either source,
//! classified as work or leave, with regular and overtime hours split out.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::domain::{AttendanceRecord, LeaveRecord};
use crate::report::holidays::is_holiday_or_sunday;

pub const FULL_DAY_HOURS: f64 = 8.0;
/// Fixed break deduction, 15 minutes.
pub const BREAK_HOURS: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCategory {
    Work,
    Leave,
}

impl DayCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Praca",
            Self::Leave => "Urlop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeCategory {
    Daytime,
    Nighttime,
    Holiday,
}

impl OvertimeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daytime => "Nadgodziny dzienne",
            Self::Nighttime => "Nadgodziny nocne",
            Self::Holiday => "Nadgodziny świąteczne",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyReportRow {
    pub date: NaiveDate,
    pub category: DayCategory,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub leave_kind: Option<String>,
    pub overtime_category: Option<OvertimeCategory>,
}

/// Worked hours for one record: end minus start in fractional hours, minus
/// the break deduction when taken, floored at zero. An open record (no end
/// time yet) counts as zero hours.
fn worked_hours(record: &AttendanceRecord) -> f64 {
    let (Some(start), Some(end)) = (record.start_time, record.end_time) else {
        return 0.0;
    };
    let mut hours = (end - start).num_seconds() as f64 / 3600.0;
    if record.break_taken {
        hours -= BREAK_HOURS;
    }
    hours.max(0.0)
}

fn is_night_work(start: NaiveTime, end: NaiveTime) -> bool {
    start.hour() >= 22 || end.hour() < 6
}

fn classify_overtime(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> OvertimeCategory {
    if is_holiday_or_sunday(date) {
        OvertimeCategory::Holiday
    } else if is_night_work(start, end) {
        OvertimeCategory::Nighttime
    } else {
        OvertimeCategory::Daytime
    }
}

/// Builds the ordered daily rows for one employee and one month.
///
/// Approved leave is inserted first and therefore takes priority over an
/// attendance record on the same date (the same precedence the calendar map
/// uses). Attendance fills the remaining dates; hours beyond the threshold
/// are overtime, classified as holiday, night or daytime work. Rows come out
/// sorted ascending by date.
pub fn chronological_report(
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    full_day_hours: f64,
) -> Vec<DailyReportRow> {
    let mut rows: BTreeMap<NaiveDate, DailyReportRow> = BTreeMap::new();

    for leave in leaves.iter().filter(|l| l.is_approved()) {
        for date in leave.dates() {
            rows.insert(
                date,
                DailyReportRow {
                    date,
                    category: DayCategory::Leave,
                    regular_hours: full_day_hours,
                    overtime_hours: 0.0,
                    leave_kind: Some(leave.kind.clone()),
                    overtime_category: None,
                },
            );
        }
    }

    for record in attendance {
        if rows.contains_key(&record.date) {
            continue;
        }
        let worked = worked_hours(record);
        let row = if worked > full_day_hours {
            // Positive hours imply both times are present.
            let overtime_category = record
                .start_time
                .zip(record.end_time)
                .map(|(start, end)| classify_overtime(record.date, start, end));
            DailyReportRow {
                date: record.date,
                category: DayCategory::Work,
                regular_hours: full_day_hours,
                overtime_hours: worked - full_day_hours,
                leave_kind: None,
                overtime_category,
            }
        } else {
            DailyReportRow {
                date: record.date,
                category: DayCategory::Work,
                regular_hours: worked,
                overtime_hours: 0.0,
                leave_kind: None,
                overtime_category: None,
            }
        };
        rows.insert(record.date, row);
    }

    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeaveStatus;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn attendance(day: u32, start: Option<NaiveTime>, end: Option<NaiveTime>, break_taken: bool) -> AttendanceRecord {
        AttendanceRecord {
            date: date(day),
            start_time: start,
            end_time: end,
            break_taken,
        }
    }

    fn approved_leave(from: u32, to: u32, kind: &str) -> LeaveRecord {
        LeaveRecord {
            date_start: date(from),
            date_end: date(to),
            kind: kind.into(),
            status: LeaveStatus::Approved,
        }
    }

    #[test]
    fn overtime_day_with_break_deduction() {
        // 2025-06-02 is a Monday: 10h minus the break leaves 1.75h overtime.
        let rows = chronological_report(
            &[attendance(2, time(8, 0), time(18, 0), true)],
            &[],
            FULL_DAY_HOURS,
        );
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.category, DayCategory::Work);
        assert_eq!(row.regular_hours, 8.0);
        assert_eq!(row.overtime_hours, 1.75);
        assert_eq!(row.overtime_category, Some(OvertimeCategory::Daytime));
    }

    #[test]
    fn exact_threshold_is_not_overtime() {
        // 2025-06-01 is a Sunday, but eight flat hours stay regular.
        let rows = chronological_report(
            &[attendance(1, time(8, 0), time(16, 0), false)],
            &[],
            FULL_DAY_HOURS,
        );
        let row = &rows[0];
        assert_eq!(row.regular_hours, 8.0);
        assert_eq!(row.overtime_hours, 0.0);
        assert_eq!(row.overtime_category, None);
    }

    #[test]
    fn sunday_overtime_is_holiday_class() {
        let rows = chronological_report(
            &[attendance(1, time(8, 0), time(18, 0), false)],
            &[],
            FULL_DAY_HOURS,
        );
        assert_eq!(
            rows[0].overtime_category,
            Some(OvertimeCategory::Holiday)
        );
    }

    #[test]
    fn corpus_christi_overtime_is_holiday_class() {
        // 2025-06-19, Boże Ciało.
        let rows = chronological_report(
            &[attendance(19, time(7, 0), time(17, 0), false)],
            &[],
            FULL_DAY_HOURS,
        );
        assert_eq!(rows[0].overtime_category, Some(OvertimeCategory::Holiday));
    }

    #[test]
    fn late_start_overtime_is_night_class() {
        // A lowered threshold exercises the night rule on a short shift.
        let rows = chronological_report(
            &[attendance(2, time(22, 0), time(23, 45), false)],
            &[],
            1.0,
        );
        assert_eq!(rows[0].overtime_category, Some(OvertimeCategory::Nighttime));
        assert_eq!(rows[0].regular_hours, 1.0);
        assert_eq!(rows[0].overtime_hours, 0.75);
    }

    #[test]
    fn leave_interval_produces_full_day_rows() {
        let rows = chronological_report(
            &[],
            &[approved_leave(10, 12, "WYPOCZYNKOWY")],
            FULL_DAY_HOURS,
        );
        assert_eq!(rows.len(), 3);
        for (row, day) in rows.iter().zip(10..=12) {
            assert_eq!(row.date, date(day));
            assert_eq!(row.category, DayCategory::Leave);
            assert_eq!(row.regular_hours, 8.0);
            assert_eq!(row.leave_kind.as_deref(), Some("WYPOCZYNKOWY"));
        }
    }

    #[test]
    fn leave_takes_priority_over_attendance() {
        let rows = chronological_report(
            &[attendance(11, time(8, 0), time(16, 0), false)],
            &[approved_leave(10, 12, "CHOROBOWY")],
            FULL_DAY_HOURS,
        );
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.category == DayCategory::Leave));
    }

    #[test]
    fn pending_leave_does_not_produce_rows() {
        let pending = LeaveRecord {
            status: LeaveStatus::Pending,
            ..approved_leave(10, 12, "WYPOCZYNKOWY")
        };
        let rows = chronological_report(&[], &[pending], FULL_DAY_HOURS);
        assert!(rows.is_empty());
    }

    #[test]
    fn open_record_counts_zero_hours() {
        let rows = chronological_report(
            &[attendance(5, time(9, 0), None, false)],
            &[],
            FULL_DAY_HOURS,
        );
        let row = &rows[0];
        assert_eq!(row.category, DayCategory::Work);
        assert_eq!(row.regular_hours, 0.0);
        assert_eq!(row.overtime_hours, 0.0);
    }

    #[test]
    fn worked_hours_floor_at_zero() {
        // Break longer than the shift, and an end time before the start.
        let rows = chronological_report(
            &[
                attendance(3, time(8, 0), time(8, 10), true),
                attendance(4, time(22, 0), time(6, 0), false),
            ],
            &[],
            FULL_DAY_HOURS,
        );
        assert_eq!(rows[0].regular_hours, 0.0);
        assert_eq!(rows[1].regular_hours, 0.0);
    }

    #[test]
    fn rows_are_sorted_ascending_by_date() {
        let rows = chronological_report(
            &[
                attendance(20, time(8, 0), time(16, 0), false),
                attendance(2, time(8, 0), time(16, 0), false),
            ],
            &[approved_leave(10, 10, "WYPOCZYNKOWY")],
            FULL_DAY_HOURS,
        );
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2), date(10), date(20)]);
    }

    #[test]
    fn report_is_idempotent() {
        let attendance = [attendance(2, time(8, 0), time(18, 0), true)];
        let leaves = [approved_leave(10, 12, "WYPOCZYNKOWY")];
        assert_eq!(
            chronological_report(&attendance, &leaves, FULL_DAY_HOURS),
            chronological_report(&attendance, &leaves, FULL_DAY_HOURS)
        );
    }
}

//! Per-day status for the personal-panel month calendar.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{AttendanceRecord, LeaveRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DayStatus {
    Present,
    Absent,
    OnLeave,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "Obecny",
            Self::Absent => "Nieobecny",
            Self::OnLeave => "Urlop",
        }
    }
}

/// Merges attendance and approved leave into one status per calendar day.
///
/// Approved leave wins on overlap: a day inside a leave interval is `OnLeave`
/// even when an (absent or present) attendance record exists for it. An
/// attendance record with both times set is `Present`; anything less,
/// including a still-open record with only a start time, is `Absent`. Days
/// covered by neither source stay out of the map and render without a badge.
///
/// Pure function of its inputs; callers recompute it on every data change.
pub fn day_status_map(
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
) -> BTreeMap<NaiveDate, DayStatus> {
    let mut statuses = BTreeMap::new();

    for leave in leaves.iter().filter(|l| l.is_approved()) {
        for date in leave.dates() {
            statuses.insert(date, DayStatus::OnLeave);
        }
    }

    for record in attendance {
        if statuses.get(&record.date) == Some(&DayStatus::OnLeave) {
            continue;
        }
        let status = if record.start_time.is_some() && record.end_time.is_some() {
            DayStatus::Present
        } else {
            DayStatus::Absent
        };
        statuses.insert(record.date, status);
    }

    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeaveStatus;
    use chrono::NaiveTime;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn time(h: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, 0, 0)
    }

    fn attendance(day: u32, start: Option<NaiveTime>, end: Option<NaiveTime>) -> AttendanceRecord {
        AttendanceRecord {
            date: date(day),
            start_time: start,
            end_time: end,
            break_taken: false,
        }
    }

    fn leave(from: u32, to: u32, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            date_start: date(from),
            date_end: date(to),
            kind: "WYPOCZYNKOWY".into(),
            status,
        }
    }

    #[test]
    fn complete_attendance_is_present() {
        let map = day_status_map(&[attendance(2, time(8), time(16))], &[]);
        assert_eq!(map.get(&date(2)), Some(&DayStatus::Present));
    }

    #[test]
    fn open_record_is_absent() {
        let map = day_status_map(&[attendance(5, time(9), None)], &[]);
        assert_eq!(map.get(&date(5)), Some(&DayStatus::Absent));
    }

    #[test]
    fn leave_interval_marks_every_day() {
        let map = day_status_map(&[], &[leave(10, 12, LeaveStatus::Approved)]);
        assert_eq!(map.len(), 3);
        for d in 10..=12 {
            assert_eq!(map.get(&date(d)), Some(&DayStatus::OnLeave));
        }
    }

    #[test]
    fn approved_leave_overrides_recorded_absence() {
        // Approved leave always wins, even when a record marks the day absent.
        let map = day_status_map(
            &[attendance(11, time(8), None)],
            &[leave(10, 12, LeaveStatus::Approved)],
        );
        assert_eq!(map.get(&date(11)), Some(&DayStatus::OnLeave));
    }

    #[test]
    fn pending_and_rejected_leave_is_ignored() {
        let map = day_status_map(
            &[],
            &[
                leave(10, 11, LeaveStatus::Pending),
                leave(15, 15, LeaveStatus::Rejected),
            ],
        );
        assert!(map.is_empty());
    }

    #[test]
    fn uncovered_days_stay_unmapped() {
        let map = day_status_map(&[attendance(2, time(8), time(16))], &[]);
        assert!(!map.contains_key(&date(3)));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let attendance = [attendance(2, time(8), time(16)), attendance(3, None, None)];
        let leaves = [leave(10, 12, LeaveStatus::Approved)];
        assert_eq!(
            day_status_map(&attendance, &leaves),
            day_status_map(&attendance, &leaves)
        );
    }
}

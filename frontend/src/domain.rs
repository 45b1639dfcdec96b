//! Strongly-typed entities behind the wire DTOs. Conversion happens once at
//! the API boundary; a record that fails validation is logged and dropped so
//! one bad row never sinks a whole month of data.

use chrono::{NaiveDate, NaiveTime};

use crate::api::types::{
    AttendanceTimeResponse, LeaveResponse, LEAVE_STATUS_APPROVED, LEAVE_STATUS_PENDING,
    LEAVE_STATUS_REJECTED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            LEAVE_STATUS_PENDING => Some(Self::Pending),
            LEAVE_STATUS_APPROVED => Some(Self::Approved),
            LEAVE_STATUS_REJECTED => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Pending => LEAVE_STATUS_PENDING,
            Self::Approved => LEAVE_STATUS_APPROVED,
            Self::Rejected => LEAVE_STATUS_REJECTED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Oczekujące",
            Self::Approved => "Zatwierdzone",
            Self::Rejected => "Odrzucone",
        }
    }
}

/// One clock-in/out cycle for one employee on one date.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_taken: bool,
}

/// A contiguous leave interval, end date inclusive.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeaveRecord {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub kind: String,
    pub status: LeaveStatus,
}

impl LeaveRecord {
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Every calendar date of the interval, both bounds included.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.date_end;
        self.date_start.iter_days().take_while(move |d| *d <= end)
    }
}

pub(crate) fn parse_date(value: &str, field: &str) -> Result<NaiveDate, String> {
    // Some backend serializers append a time part; the date prefix is enough.
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| format!("invalid {field} date {value:?}"))
}

fn parse_time(value: &str, field: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| format!("invalid {field} time {value:?}"))
}

impl TryFrom<&AttendanceTimeResponse> for AttendanceRecord {
    type Error = String;

    fn try_from(dto: &AttendanceTimeResponse) -> Result<Self, Self::Error> {
        let date = parse_date(&dto.date, "attendance")?;
        let start_time = dto
            .start_time
            .as_deref()
            .map(|t| parse_time(t, "start"))
            .transpose()?;
        let end_time = dto
            .end_time
            .as_deref()
            .map(|t| parse_time(t, "end"))
            .transpose()?;
        Ok(Self {
            date,
            start_time,
            end_time,
            break_taken: dto.break_taken,
        })
    }
}

impl TryFrom<&LeaveResponse> for LeaveRecord {
    type Error = String;

    fn try_from(dto: &LeaveResponse) -> Result<Self, Self::Error> {
        let date_start = parse_date(&dto.date_start, "leave start")?;
        let date_end = parse_date(&dto.date_end, "leave end")?;
        if date_end < date_start {
            return Err(format!(
                "leave interval ends before it starts: {} > {}",
                dto.date_start, dto.date_end
            ));
        }
        let status = LeaveStatus::from_code(&dto.status)
            .ok_or_else(|| format!("unknown leave status {:?}", dto.status))?;
        Ok(Self {
            date_start,
            date_end,
            kind: dto.kind.clone(),
            status,
        })
    }
}

pub fn attendance_records(items: &[AttendanceTimeResponse]) -> Vec<AttendanceRecord> {
    items
        .iter()
        .filter_map(|dto| match AttendanceRecord::try_from(dto) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Dropping attendance record {}: {err}", dto.id);
                None
            }
        })
        .collect()
}

pub fn leave_records(items: &[LeaveResponse]) -> Vec<LeaveRecord> {
    items
        .iter()
        .filter_map(|dto| match LeaveRecord::try_from(dto) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Dropping leave record {}: {err}", dto.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave_dto(start: &str, end: &str, status: &str) -> LeaveResponse {
        LeaveResponse {
            id: 1,
            date_start: start.into(),
            date_end: end.into(),
            kind: "WYPOCZYNKOWY".into(),
            status: status.into(),
            submitted_on: None,
            employee: None,
        }
    }

    fn attendance_dto(date: &str, start: Option<&str>, end: Option<&str>) -> AttendanceTimeResponse {
        AttendanceTimeResponse {
            id: 1,
            date: date.into(),
            start_time: start.map(Into::into),
            end_time: end.map(Into::into),
            break_taken: false,
            employee: None,
        }
    }

    #[test]
    fn converts_complete_attendance_record() {
        let record =
            AttendanceRecord::try_from(&attendance_dto("2025-06-02", Some("08:00:00"), Some("18:00:00")))
                .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(
            record.start_time,
            Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap())
        );
    }

    #[test]
    fn accepts_short_time_format() {
        let record =
            AttendanceRecord::try_from(&attendance_dto("2025-06-02", Some("08:30"), None)).unwrap();
        assert_eq!(
            record.start_time,
            Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
        );
        assert!(record.end_time.is_none());
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(AttendanceRecord::try_from(&attendance_dto("czerwiec", None, None)).is_err());
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let records = attendance_records(&[
            attendance_dto("2025-06-02", Some("08:00:00"), None),
            attendance_dto("not-a-date", None, None),
            attendance_dto("2025-06-03", None, None),
        ]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn leave_interval_must_be_ordered() {
        assert!(LeaveRecord::try_from(&leave_dto("2025-06-12", "2025-06-10", "ZATWIERDZONE")).is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(LeaveRecord::try_from(&leave_dto("2025-06-10", "2025-06-12", "MOŻE")).is_err());
    }

    #[test]
    fn leave_records_drops_malformed_and_unknown_status() {
        let converted = leave_records(&[
            leave_dto("2025-06-10", "2025-06-12", "ZATWIERDZONE"),
            leave_dto("not-a-date", "2025-06-16", "OCZEKUJĄCE"),
            leave_dto("2025-06-20", "2025-06-20", "WSTRZYMANE"),
        ]);
        assert_eq!(converted.len(), 1);
        assert_eq!(
            converted[0].date_start,
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
    }

    #[test]
    fn leave_dates_include_both_bounds() {
        let leave = LeaveRecord::try_from(&leave_dto("2025-06-10", "2025-06-12", "ZATWIERDZONE"))
            .unwrap();
        let dates: Vec<_> = leave.dates().collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 6, 12).unwrap());
    }

    #[test]
    fn single_day_interval_yields_one_date() {
        let leave = LeaveRecord::try_from(&leave_dto("2025-06-10", "2025-06-10", "ZATWIERDZONE"))
            .unwrap();
        assert_eq!(leave.dates().count(), 1);
    }
}

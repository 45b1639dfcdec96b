use super::*;
use serde_json::json;

fn attendance_json(date: &str) -> serde_json::Value {
    json!({
        "id": 11,
        "date": date,
        "startTime": "08:00:00",
        "endTime": "16:15:00",
        "breakTaken": true,
        "employee": {
            "id": 7,
            "name": "Jan",
            "lastname": "Kowalski",
            "email": "jan.kowalski@example.com"
        }
    })
}

fn leave_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "dataStart": "2025-06-10",
        "dataKoniec": "2025-06-12",
        "rodzaj": "WYPOCZYNKOWY",
        "status": "ZATWIERDZONE",
        "złożono": "2025-05-28"
    })
}

#[test]
fn attendance_response_maps_wire_field_names() {
    let record: AttendanceTimeResponse =
        serde_json::from_value(attendance_json("2025-06-02")).unwrap();
    assert_eq!(record.date, "2025-06-02");
    assert_eq!(record.start_time.as_deref(), Some("08:00:00"));
    assert_eq!(record.end_time.as_deref(), Some("16:15:00"));
    assert!(record.break_taken);
    assert_eq!(record.employee.unwrap().full_name(), "Jan Kowalski");
}

#[test]
fn attendance_response_tolerates_open_record() {
    let record: AttendanceTimeResponse = serde_json::from_value(json!({
        "id": 3,
        "date": "2025-06-05",
        "startTime": "09:00:00"
    }))
    .unwrap();
    assert!(record.end_time.is_none());
    assert!(!record.break_taken);
}

#[test]
fn leave_response_maps_polish_field_names() {
    let leave: LeaveResponse = serde_json::from_value(leave_json(5)).unwrap();
    assert_eq!(leave.date_start, "2025-06-10");
    assert_eq!(leave.date_end, "2025-06-12");
    assert_eq!(leave.kind, "WYPOCZYNKOWY");
    assert_eq!(leave.status, LEAVE_STATUS_APPROVED);
    assert_eq!(leave.submitted_on.as_deref(), Some("2025-05-28"));
}

#[test]
fn leave_request_serializes_polish_field_names() {
    let payload = LeaveRequestPayload {
        date_start: "2025-07-01".into(),
        date_end: "2025-07-03".into(),
        kind: "CHOROBOWY".into(),
        employee_id: 7,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "dataStart": "2025-07-01",
            "dataKoniec": "2025-07-03",
            "rodzaj": "CHOROBOWY",
            "employeeId": 7
        })
    );
}

#[test]
fn decode_records_skips_malformed_elements() {
    let items = vec![
        attendance_json("2025-06-02"),
        json!({ "id": "not-a-number", "date": 12 }),
        attendance_json("2025-06-03"),
    ];
    let records: Vec<AttendanceTimeResponse> = client::decode_records(items, "attendance");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].date, "2025-06-03");
}

#[test]
fn hours_summary_total_adds_every_bucket() {
    let summary: HoursSummary = serde_json::from_value(json!({
        "regular": 160.0,
        "overtimeDay": 4.0,
        "overtimeNight": 2.0,
        "overtimeHoliday": 8.0,
        "leaveVacation": 16.0,
        "sickLeave": 8.0
    }))
    .unwrap();
    assert_eq!(summary.total(), 198.0);
    assert_eq!(summary.overtime_holiday, 8.0);
}

#[test]
fn hours_summary_defaults_missing_buckets_to_zero() {
    let summary: HoursSummary = serde_json::from_value(json!({})).unwrap();
    assert_eq!(summary.total(), 0.0);
}

use chrono::NaiveDate;

use super::{
    client::{query_string, ApiClient, ApiError},
    types::{AttendanceTimeRequest, AttendanceTimeResponse},
};

impl ApiClient {
    /// Clock-in: the backend creates the record with the start time set.
    pub async fn initialize_attendance(
        &self,
        request: &AttendanceTimeRequest,
    ) -> Result<AttendanceTimeResponse, ApiError> {
        self.post_json("/attendance/initialize", request).await
    }

    /// Clock-out: sets the end time and the break flag on an open record.
    pub async fn finalize_attendance(
        &self,
        attendance_id: i64,
        end_time: &str,
        break_taken: bool,
    ) -> Result<AttendanceTimeResponse, ApiError> {
        let query = query_string(&[
            ("endTime", end_time.to_string()),
            ("breakTaken", break_taken.to_string()),
        ]);
        self.patch_query(&format!("/attendance/finalize/{attendance_id}{query}"))
            .await
    }

    pub async fn get_all_attendance(&self) -> Result<Vec<AttendanceTimeResponse>, ApiError> {
        self.get_records("/attendance/all", "attendance").await
    }

    pub async fn get_attendance_by_employee_and_range(
        &self,
        employee_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceTimeResponse>, ApiError> {
        let query = query_string(&[
            ("employeeId", employee_id.to_string()),
            ("startDate", start_date.format("%Y-%m-%d").to_string()),
            ("endDate", end_date.format("%Y-%m-%d").to_string()),
        ]);
        self.get_records(&format!("/attendance/employee{query}"), "attendance")
            .await
    }

    pub async fn get_worked_hours_in_month(&self, year: i32, month: u32) -> Result<f64, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/profiles/attendance/hours{query}"))
            .await
    }
}

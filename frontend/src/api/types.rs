use serde::{Deserialize, Serialize};

/// Leave status codes as the backend emits them.
pub const LEAVE_STATUS_PENDING: &str = "OCZEKUJĄCE";
pub const LEAVE_STATUS_APPROVED: &str = "ZATWIERDZONE";
pub const LEAVE_STATUS_REJECTED: &str = "ODRZUCONE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBasicResponse {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub pesel: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "dataZatrudnienia", default)]
    pub hired_on: Option<String>,
    #[serde(rename = "dataZwolnienia", default)]
    pub terminated_on: Option<String>,
    #[serde(rename = "stawka", default)]
    pub hourly_rate: f64,
    #[serde(rename = "wymiarPracy", default)]
    pub work_time: String,
    #[serde(rename = "rodzajRozliczenia", default)]
    pub settlement_kind: String,
    #[serde(rename = "staż", default)]
    pub seniority_years: i32,
    #[serde(rename = "dostępneDniUrlopu", default)]
    pub leave_days_available: i32,
    #[serde(rename = "wykorzystaneDniUrlopu", default)]
    pub leave_days_used: i32,
}

impl EmployeeBasicResponse {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub pesel: String,
    pub phone: String,
    pub date_of_birth: String,
    pub sex: String,
    pub role: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "dataZatrudnienia")]
    pub hired_on: String,
    #[serde(rename = "stawka")]
    pub hourly_rate: f64,
    #[serde(rename = "wymiarPracy")]
    pub work_time: String,
    #[serde(rename = "rodzajRozliczenia")]
    pub settlement_kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceTimeResponse {
    pub id: i64,
    /// ISO calendar date, "YYYY-MM-DD".
    pub date: String,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
    #[serde(rename = "breakTaken", default)]
    pub break_taken: bool,
    #[serde(default)]
    pub employee: Option<EmployeeBasicResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTimeRequest {
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub date: String,
    pub employee_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveResponse {
    pub id: i64,
    #[serde(rename = "dataStart")]
    pub date_start: String,
    #[serde(rename = "dataKoniec")]
    pub date_end: String,
    #[serde(rename = "rodzaj")]
    pub kind: String,
    pub status: String,
    #[serde(rename = "złożono", default)]
    pub submitted_on: Option<String>,
    #[serde(default)]
    pub employee: Option<EmployeeBasicResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRequestPayload {
    #[serde(rename = "dataStart")]
    pub date_start: String,
    #[serde(rename = "dataKoniec")]
    pub date_end: String,
    #[serde(rename = "rodzaj")]
    pub kind: String,
    #[serde(rename = "employeeId")]
    pub employee_id: i64,
}

/// Monthly per-category hour buckets computed by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursSummary {
    #[serde(default)]
    pub regular: f64,
    #[serde(default)]
    pub overtime_day: f64,
    #[serde(default)]
    pub overtime_night: f64,
    #[serde(default)]
    pub overtime_holiday: f64,
    #[serde(default)]
    pub leave_vacation: f64,
    #[serde(default)]
    pub leave_unpaid: f64,
    #[serde(default)]
    pub leave_circumstance: f64,
    #[serde(default)]
    pub leave_pregnant: f64,
    #[serde(default)]
    pub leave_parental: f64,
    #[serde(default)]
    pub leave_training: f64,
    #[serde(default)]
    pub leave_higher_power: f64,
    #[serde(default)]
    pub leave_job_search: f64,
    #[serde(default)]
    pub leave_blood: f64,
    #[serde(default)]
    pub leave_carer: f64,
    #[serde(default)]
    pub sick_leave: f64,
}

impl HoursSummary {
    pub fn total(&self) -> f64 {
        self.regular
            + self.overtime_day
            + self.overtime_night
            + self.overtime_holiday
            + self.leave_vacation
            + self.leave_unpaid
            + self.leave_circumstance
            + self.leave_pregnant
            + self.leave_parental
            + self.leave_training
            + self.leave_higher_power
            + self.leave_job_search
            + self.leave_blood
            + self.leave_carer
            + self.sick_leave
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCostResponse {
    pub id: i64,
    pub department: String,
    pub date: String,
    pub amount: f64,
    pub cost_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCostRequest {
    pub department: String,
    pub date: String,
    pub amount: f64,
    pub cost_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i64,
    pub bank_account_number: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub bank_account_number: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub due_date: String,
    pub payment_date: String,
}

use super::{
    client::{query_string, ApiClient, ApiError},
    types::HoursSummary,
};

impl ApiClient {
    /// Monthly per-category hour buckets for one employee. `days` carries the
    /// pay-period anchor dates the backend expects, repeated in the query
    /// string ("days=...&days=...").
    pub async fn get_personal_summary(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
        days: &[String],
    ) -> Result<HoursSummary, ApiError> {
        let mut pairs: Vec<(&str, String)> = vec![
            ("employeeId", employee_id.to_string()),
            ("year", year.to_string()),
            ("month", month.to_string()),
        ];
        for day in days {
            pairs.push(("days", day.clone()));
        }
        let query = query_string(&pairs);
        self.get_json(&format!("/profiles/summary{query}")).await
    }

    /// Company-wide hour buckets for the month. Same route and shape as the
    /// personal summary, with `employeeId` omitted.
    pub async fn get_monthly_summary(
        &self,
        year: i32,
        month: u32,
        days: &[String],
    ) -> Result<HoursSummary, ApiError> {
        let mut pairs: Vec<(&str, String)> =
            vec![("year", year.to_string()), ("month", month.to_string())];
        for day in days {
            pairs.push(("days", day.clone()));
        }
        let query = query_string(&pairs);
        self.get_json(&format!("/profiles/summary{query}")).await
    }
}

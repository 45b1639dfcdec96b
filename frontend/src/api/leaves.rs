use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{
    client::{query_string, ApiClient, ApiError},
    types::{LeaveRequestPayload, LeaveResponse},
};

/// Optional filters for `GET /leaves/get`; omitted fields are left out of the
/// query string entirely, which the backend treats as "no filter".
#[derive(Debug, Clone, Default)]
pub struct LeaveQuery {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub employee_id: Option<i64>,
}

impl LeaveQuery {
    fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(date) = self.date_start {
            pairs.push(("dateStart", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.date_end {
            pairs.push(("dateEnd", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("leaveStatus", status.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("leaveType", kind.clone()));
        }
        if let Some(id) = self.employee_id {
            pairs.push(("employeeId", id.to_string()));
        }
        query_string(&pairs)
    }
}

impl ApiClient {
    pub async fn request_leave(
        &self,
        request: &LeaveRequestPayload,
    ) -> Result<LeaveResponse, ApiError> {
        self.post_json("/leaves/request", request).await
    }

    /// Approve or reject a pending request; the backend answers with the new
    /// status code as plain text.
    pub async fn change_leave_status(
        &self,
        leave_id: i64,
        new_status: &str,
    ) -> Result<String, ApiError> {
        let query = query_string(&[("newStatus", new_status.to_string())]);
        self.patch_text(&format!("/leaves/change/{leave_id}{query}"))
            .await
    }

    pub async fn get_all_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.get_records("/leaves/all", "leave").await
    }

    pub async fn get_leaves_by_params(
        &self,
        query: &LeaveQuery,
    ) -> Result<Vec<LeaveResponse>, ApiError> {
        self.get_records(&format!("/leaves/get{}", query.to_query_string()), "leave")
            .await
    }

    pub async fn get_leaves_count_in_month(&self, year: i32, month: u32) -> Result<i64, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/profiles/leaves/count{query}")).await
    }

    pub async fn get_leave_distribution_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<String, f64>, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/profiles/leaves/distribution{query}"))
            .await
    }
}

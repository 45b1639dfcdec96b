use std::collections::BTreeMap;

use super::{
    client::{query_string, ApiClient, ApiError},
    types::{DepartmentCostRequest, DepartmentCostResponse, PaymentRequest, PaymentResponse},
};

impl ApiClient {
    pub async fn add_department_cost(
        &self,
        request: &DepartmentCostRequest,
    ) -> Result<DepartmentCostResponse, ApiError> {
        self.post_json("/costs/add", request).await
    }

    pub async fn get_department_costs(
        &self,
        department: Option<&str>,
    ) -> Result<Vec<DepartmentCostResponse>, ApiError> {
        let query = match department {
            Some(dep) => query_string(&[("department", dep.to_string())]),
            None => String::new(),
        };
        self.get_records(&format!("/costs/get{query}"), "department cost")
            .await
    }

    pub async fn get_costs_total_in_month(&self, year: i32, month: u32) -> Result<f64, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/costs/total{query}")).await
    }

    pub async fn get_cost_distribution_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<String, f64>, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/costs/distribution{query}")).await
    }

    pub async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, ApiError> {
        self.post_json("/payments/request", request).await
    }

    pub async fn get_payments(
        &self,
        employee_id: Option<i64>,
    ) -> Result<Vec<PaymentResponse>, ApiError> {
        let query = match employee_id {
            Some(id) => query_string(&[("employeeId", id.to_string())]),
            None => String::new(),
        };
        self.get_records(&format!("/payments/get{query}"), "payment")
            .await
    }
}

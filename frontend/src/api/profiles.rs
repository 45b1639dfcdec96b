use super::{
    client::{query_string, ApiClient, ApiError},
    types::{EmployeeBasicResponse, EmployeeRequest},
};

impl ApiClient {
    pub async fn get_employees(&self) -> Result<Vec<EmployeeBasicResponse>, ApiError> {
        self.get_records("/profiles/list", "employee").await
    }

    pub async fn get_employee(&self, employee_id: i64) -> Result<EmployeeBasicResponse, ApiError> {
        self.get_json(&format!("/profiles/{employee_id}")).await
    }

    pub async fn create_employee(
        &self,
        request: &EmployeeRequest,
    ) -> Result<EmployeeBasicResponse, ApiError> {
        self.post_json("/profiles/create", request).await
    }

    pub async fn count_employees(&self) -> Result<i64, ApiError> {
        self.get_json("/profiles/count").await
    }

    pub async fn count_new_employees(&self, year: i32, month: u32) -> Result<i64, ApiError> {
        let query = query_string(&[("year", year.to_string()), ("month", month.to_string())]);
        self.get_json(&format!("/profiles/count/new{query}")).await
    }
}

use super::{
    client::ApiClient,
    types::{LoginRequest, LoginResponse},
};
use crate::api::client::ApiError;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }
}

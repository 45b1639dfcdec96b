use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{config, utils::storage as storage_utils};

#[derive(Debug, Clone, Error, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ApiError {
    #[error("Błąd połączenia: {0}")]
    Network(String),
    #[error("Niepoprawna odpowiedź serwera: {0}")]
    Decode(String),
    #[error("Brak dostępu do pamięci przeglądarki: {0}")]
    Storage(String),
    #[error("Sesja wygasła")]
    Unauthorized,
    #[error("{message}")]
    Backend { status: u16, message: String },
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn clear_session() {
        storage_utils::clear_session_keys();
    }

    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session();
            Self::redirect_to_login_if_needed();
            return ApiError::Unauthorized;
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .or_else(|| {
                if body.trim().is_empty() {
                    None
                } else {
                    Some(body)
                }
            })
            .unwrap_or_else(|| status.to_string());
        ApiError::Backend {
            status: status.as_u16(),
            message,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{base_url}{path}"))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    /// PATCH with parameters carried in the query string and an empty body,
    /// the way the backend's finalize/change endpoints expect them.
    pub(crate) async fn patch_query<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .patch(format!("{base_url}{path}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    /// PATCH whose response body is plain text (the status-change endpoints
    /// answer with the new status code, not JSON).
    pub(crate) async fn patch_text(&self, path: &str) -> Result<String, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .patch(format!("{base_url}{path}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.status().is_success() {
            response
                .text()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Fetches a JSON array and decodes it element by element: a malformed
    /// record is logged and skipped instead of failing the whole list.
    pub(crate) async fn get_records<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>, ApiError> {
        let raw: Value = self.get_json(path).await?;
        let items = match raw {
            Value::Array(items) => items,
            other => {
                return Err(ApiError::Decode(format!(
                    "expected a JSON array of {what}, got {other}"
                )))
            }
        };
        Ok(decode_records(items, what))
    }
}

pub(crate) fn decode_records<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping malformed {what} record: {err}");
                None
            }
        })
        .collect()
}

/// Builds "?a=1&b=2" from the given pairs; values are percent-encoded so the
/// Polish status codes survive the trip.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(&utf8_percent_encode(value, NON_ALPHANUMERIC).to_string());
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_percent_encodes_values() {
        let query = query_string(&[
            ("leaveStatus", "ZATWIERDZONE".to_string()),
            ("employeeId", "7".to_string()),
        ]);
        assert_eq!(query, "?leaveStatus=ZATWIERDZONE&employeeId=7");

        let encoded = query_string(&[("leaveStatus", "OCZEKUJĄCE".to_string())]);
        assert_eq!(encoded, "?leaveStatus=OCZEKUJ%C4%84CE");
    }

    #[test]
    fn query_string_is_empty_for_no_pairs() {
        assert_eq!(query_string(&[]), "");
    }
}

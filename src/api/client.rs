use crate::api::models::AccountRecord;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with an error status. `message` is already
    /// the text to show the user: the `message` field of a JSON error
    /// body when one was sent, the formatted status line otherwise.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// The request never got an answer (refused, unreachable, timed out).
    #[error("No response received. Please check your connection.")]
    NoResponse(#[source] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else reqwest can fail with while building or decoding.
    #[error(transparent)]
    Request(reqwest::Error),
}

impl ApiError {
    fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                format!(
                    "Error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
            });
        ApiError::Status { status, message }
    }

    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            ApiError::NoResponse(error)
        } else {
            ApiError::Request(error)
        }
    }
}

/// Error body the backend may send alongside a non-2xx status. Plain-text
/// bodies fail to parse and fall back to the status line.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the accounting-info backend.
///
/// The base address is injected at construction; nothing in here reads
/// the environment.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch one page of records whose account name matches `account_name`.
    ///
    /// A 404 is how the backend says the search found nothing, so it comes
    /// back as an empty page rather than an error.
    pub async fn list_records(
        &self,
        account_name: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountRecord>, ApiError> {
        if page < 1 {
            return Err(ApiError::InvalidInput(
                "Page number must be 1 or greater".to_string(),
            ));
        }

        let url = format!("{}/accountinginfo", self.base_url);

        let mut params = HashMap::<&str, String>::new();
        params.insert("page", page.to_string());
        params.insert("pageSize", page_size.to_string());
        params.insert("accountName", account_name.to_string());

        debug!(
            "Accounting API: listing records for '{}', page {}",
            account_name, page
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            let records: Vec<AccountRecord> =
                response.json().await.map_err(ApiError::from_transport)?;
            debug!(
                "Accounting API: got {} record(s) for page {}",
                records.len(),
                page
            );
            Ok(records)
        } else if status == StatusCode::NOT_FOUND {
            debug!("Accounting API: no records match '{}'", account_name);
            Ok(Vec::new())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("Accounting API: list failed with status {}", status);
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Create one record. The backend replies with the stored id, which
    /// nothing here needs.
    pub async fn create_record(&self, record: &AccountRecord) -> Result<(), ApiError> {
        let url = format!("{}/accountinginfo", self.base_url);

        debug!(
            "Accounting API: creating record for '{}'",
            record.account_name
        );

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("Accounting API: create failed with status {}", status);
            Err(ApiError::from_status(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_the_message_from_a_json_body() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "vault unavailable"}"#,
        );
        assert_eq!(err.to_string(), "vault unavailable");
    }

    #[test]
    fn status_error_falls_back_to_the_status_line() {
        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "upstream exploded");
        assert_eq!(err.to_string(), "Error: 503 Service Unavailable");
    }

    #[test]
    fn status_error_ignores_json_without_a_message_field() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"error": "nope"}"#);
        assert_eq!(err.to_string(), "Error: 400 Bad Request");
    }
}

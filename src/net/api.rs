//! REST helpers for the activities API.
//!
//! Endpoint construction and response interpretation are plain functions so
//! they can be tested natively. The browser transport (`csr` feature) only
//! moves bytes: it sends the request and hands status + body text to
//! [`parse_snapshot_response`] / [`parse_mutation_response`].
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Callers decide how each
//! variant is presented; nothing here logs or touches UI state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivitiesSnapshot, ErrorBody, MessageBody};

/// Fallback text for a rejected request that carried no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure of a single activities API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Rejected { status: u16, detail: Option<String> },
    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user for a rejection, or `None` when the failure
    /// happened below the HTTP layer and the caller should use its own
    /// operation-specific fallback.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Operations the panel needs from the backend.
///
/// Implementations are single-threaded: futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`. Returns the server message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{activity}/unregister/{email}`. Returns the server message.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn unregister_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister/{}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the detail text from a failure body.
///
/// Any JSON value except `null` is a readable rejection. `null` and non-JSON
/// text are `Decode` errors.
fn rejection_detail(body: &str) -> Result<Option<String>, ApiError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => Err(ApiError::Decode("null failure body".to_owned())),
        Ok(value) => Ok(ErrorBody::from_value(&value).into_detail()),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Interpret a `GET /activities` response.
///
/// # Errors
///
/// `Rejected` for a non-2xx status, `Decode` when a 2xx body is not an
/// activities object.
pub fn parse_snapshot_response(status: u16, body: &str) -> Result<ActivitiesSnapshot, ApiError> {
    if !is_success(status) {
        let detail = rejection_detail(body).unwrap_or_default();
        return Err(ApiError::Rejected { status, detail });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a signup or unregister response.
///
/// # Errors
///
/// `Rejected` for a non-2xx status with any non-null JSON body (detail
/// extracted when it is a string), `Decode` when the failure body is `null` or
/// not JSON, or when a 2xx body lacks `message`.
pub fn parse_mutation_response(status: u16, body: &str) -> Result<String, ApiError> {
    if is_success(status) {
        let parsed: MessageBody = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(parsed.message);
    }
    let detail = rejection_detail(body)?;
    Err(ApiError::Rejected { status, detail })
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug, Default)]
pub struct GlooActivitiesApi {
    base: String,
}

#[cfg(feature = "csr")]
impl GlooActivitiesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn read(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[cfg(feature = "csr")]
impl ActivitiesApi for GlooActivitiesApi {
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError> {
        let resp = gloo_net::http::Request::get(&activities_endpoint(&self.base))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::read(resp).await?;
        parse_snapshot_response(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let resp = gloo_net::http::Request::post(&signup_endpoint(&self.base, activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::read(resp).await?;
        parse_mutation_response(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let resp = gloo_net::http::Request::delete(&unregister_endpoint(&self.base, activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::read(resp).await?;
        parse_mutation_response(status, &body)
    }
}

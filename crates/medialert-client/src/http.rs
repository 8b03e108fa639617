//! HTTP plumbing shared by every endpoint module.
//!
//! The backend authenticates with a session cookie. Within one process the
//! cookie store keeps it; across CLI invocations the raw `Set-Cookie` pair
//! captured at login is saved by the caller and replayed via
//! [`ApiClient::set_session_token`].

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use medialert_core::config::api::ApiConfig;
use medialert_core::error::{AppError, ErrorKind};
use medialert_core::result::AppResult;

/// Shared response envelope: `{"message": ...}`.
#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message.
    pub message: String,
}

/// Shared response envelope for creation: `{"message": ..., "id": ...}`.
#[derive(Debug, serde::Deserialize)]
pub struct CreatedResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Identifier of the created record.
    pub id: i64,
}

/// Typed client for the MediAlert REST backend.
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
    session: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid API base URL '{}': {e}", config.base_url))
        })?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            base,
            http,
            session: RwLock::new(None),
        })
    }

    /// The session cookie captured at login, if any.
    pub fn session_token(&self) -> Option<String> {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Replay a previously saved session cookie.
    pub fn set_session_token(&self, token: Option<String>) {
        *self.session.write().expect("session lock poisoned") = token;
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        self.base
            .join(path)
            .map_err(|e| AppError::internal(format!("Invalid API path '{path}': {e}")))
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(cookie) = self.session_token() {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }

    /// Capture the backend session cookie from a login response.
    pub(crate) fn remember_session(&self, response: &Response) {
        if let Some(set_cookie) = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            // Only the name=value pair is replayed; attributes are for the jar.
            let pair = set_cookie.split(';').next().unwrap_or(set_cookie);
            self.set_session_token(Some(pair.trim().to_string()));
        }
    }

    /// Forget the session cookie (logout).
    pub(crate) fn clear_session(&self) {
        self.set_session_token(None);
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = self
            .request(reqwest::Method::GET, url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        Self::handle(response).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> AppResult<Vec<u8>> {
        let url = self.url(path)?;
        debug!(%url, "GET (binary)");
        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self
            .request(reqwest::Method::POST, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        Self::handle(response).await
    }

    /// POST returning the raw response, for callers that need headers.
    pub(crate) async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<Response> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self
            .request(reqwest::Method::POST, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        let url = self.url(path)?;
        debug!(%url, "POST (multipart)");
        let response = self
            .request(reqwest::Method::POST, url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        Self::handle(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.url(path)?;
        debug!(%url, "PUT");
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        Self::handle(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path)?;
        debug!(%url, "DELETE");
        let response = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .map_err(transport_error)?;
        Self::handle(response).await
    }

    async fn handle<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode API response: {e}"),
                e,
            )
        })
    }

    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::new(kind_for_status(status), error_message(status, &body))
    }
}

/// Extract the display message for a failed response.
///
/// The backend reports failures as `{"error": "..."}`; when the body is not
/// that shape the HTTP status text is used instead, with the numeric code
/// appended either way.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let text = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });
    format!("{text} ({})", status.as_u16())
}

/// Map an HTTP status to an error category.
pub(crate) fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        _ => ErrorKind::ExternalService,
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Request failed: {err}"),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_body() {
        let msg = error_message(
            StatusCode::CONFLICT,
            r#"{"error": "La cédula \"123\" ya está registrada."}"#,
        );
        assert_eq!(msg, "La cédula \"123\" ya está registrada. (409)");
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(msg, "Internal Server Error (500)");
    }

    #[test]
    fn test_kind_for_status() {
        assert_eq!(
            kind_for_status(StatusCode::UNAUTHORIZED),
            ErrorKind::Authentication
        );
        assert_eq!(kind_for_status(StatusCode::NOT_FOUND), ErrorKind::NotFound);
        assert_eq!(
            kind_for_status(StatusCode::BAD_GATEWAY),
            ErrorKind::ExternalService
        );
    }

    #[test]
    fn test_session_token_round_trip() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert!(client.session_token().is_none());
        client.set_session_token(Some("session=abc123".into()));
        assert_eq!(client.session_token().as_deref(), Some("session=abc123"));
        client.clear_session();
        assert!(client.session_token().is_none());
    }
}

//! HTTP implementation of [`HostBackend`].
//!
//! Talks to the stay booking REST API with a bearer token:
//!
//! | Operation                    | Request                                 |
//! |------------------------------|-----------------------------------------|
//! | `list_stays_for_host`        | `GET    {base}/stays/`                  |
//! | `list_reservations_for_stay` | `GET    {base}/stays/reservations/{id}` |
//! | `delete_stay`                | `DELETE {base}/stays/{id}`              |
//!
//! `{id}` is percent-encoded as a single path segment.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::backend::{HostBackend, RemoteError};
use super::types::{Reservation, Stay};

const LIST_STAYS_FAILED: &str = "Fail to get stay list";
const LIST_RESERVATIONS_FAILED: &str = "Fail to get reservations by stay";
const DELETE_STAY_FAILED: &str = "Fail to delete stay";

pub struct HttpBackend {
    base_url: Url,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(
        base_url: String,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(&base_url)
            .map_err(|e| RemoteError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Config(format!(
                "invalid base URL {base_url}: cannot hold a path"
            )));
        }

        Ok(Self {
            base_url,
            auth_token,
            client,
        })
    }

    /// Joins `segments` onto the base URL. Each segment is percent-encoded,
    /// so an id never escapes its own path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteError::Config(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL for one stay's resource. Ids that path resolution would collapse
    /// (empty, `.`, `..`) are refused.
    fn stay_endpoint(&self, prefix: &[&str], stay_id: &str) -> Result<Url, RemoteError> {
        if matches!(stay_id, "" | "." | "..") {
            return Err(RemoteError::Config(format!("invalid stay id {stay_id:?}")));
        }
        let mut segments = prefix.to_vec();
        segments.push(stay_id);
        self.endpoint(&segments)
    }

    fn bearer(&self) -> Result<String, RemoteError> {
        self.auth_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {token}"))
            .ok_or_else(|| {
                RemoteError::Config(
                    "not signed in: set STAYDESK_AUTH_TOKEN or backend.auth_token".to_string(),
                )
            })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<reqwest::Response, RemoteError> {
        let response = request
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(transport_error)?;

        debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Backend API error: {} - {}", status, body);
            return Err(RemoteError::Api {
                status,
                message: error_message(&body, fallback),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        fallback: &str,
    ) -> Result<T, RemoteError> {
        let response = self.send(self.client.get(url.clone()), fallback).await?;
        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            RemoteError::Parse(format!("{fallback}: {e}"))
        })
    }
}

#[async_trait]
impl HostBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_stays_for_host(&self) -> Result<Vec<Stay>, RemoteError> {
        let stays: Vec<Stay> = self
            .get_json(self.endpoint(&["stays", ""])?, LIST_STAYS_FAILED)
            .await?;
        info!("Fetched {} stays", stays.len());
        Ok(stays)
    }

    async fn list_reservations_for_stay(
        &self,
        stay_id: &str,
    ) -> Result<Vec<Reservation>, RemoteError> {
        let reservations: Vec<Reservation> = self
            .get_json(
                self.stay_endpoint(&["stays", "reservations"], stay_id)?,
                LIST_RESERVATIONS_FAILED,
            )
            .await?;
        info!(
            "Fetched {} reservations for stay {}",
            reservations.len(),
            stay_id
        );
        Ok(reservations)
    }

    async fn delete_stay(&self, stay_id: &str) -> Result<(), RemoteError> {
        let url = self.stay_endpoint(&["stays"], stay_id)?;
        self.send(self.client.delete(url), DELETE_STAY_FAILED)
            .await?;
        info!("Deleted stay {}", stay_id);
        Ok(())
    }
}

fn transport_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Network("request timed out".to_string())
    } else {
        RemoteError::Network(e.to_string())
    }
}

/// Picks the text to show for a failed request: a JSON `message`/`error`
/// field or a bare JSON string, else the raw body, else the operation's
/// default text.
fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str(body) {
        Ok(serde_json::Value::Object(map)) => {
            for key in ["message", "error"] {
                if let Some(serde_json::Value::String(text)) = map.get(key)
                    && !text.trim().is_empty()
                {
                    return text.trim().to_string();
                }
            }
            return fallback.to_string();
        }
        Ok(serde_json::Value::String(text)) => {
            let text = text.trim();
            return if text.is_empty() {
                fallback.to_string()
            } else {
                text.to_string()
            };
        }
        _ => {}
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        let body = r#"{"message": "cannot delete: has active reservations"}"#;
        assert_eq!(
            error_message(body, DELETE_STAY_FAILED),
            "cannot delete: has active reservations"
        );
    }

    #[test]
    fn error_message_uses_error_field() {
        assert_eq!(error_message(r#"{"error": "Forbidden"}"#, "x"), "Forbidden");
    }

    #[test]
    fn error_message_plain_text_body() {
        assert_eq!(error_message("  Not Found \n", "x"), "Not Found");
    }

    #[test]
    fn error_message_unquotes_bare_json_string() {
        assert_eq!(error_message(r#""Stay not found""#, "x"), "Stay not found");
        assert_eq!(error_message(r#""  ""#, DELETE_STAY_FAILED), DELETE_STAY_FAILED);
    }

    #[test]
    fn endpoint_encodes_id_as_single_segment() {
        let backend =
            HttpBackend::new("http://host/api/".into(), None, Duration::from_secs(1)).unwrap();
        assert_eq!(
            backend.endpoint(&["stays", ""]).unwrap().as_str(),
            "http://host/api/stays/"
        );
        assert_eq!(
            backend.stay_endpoint(&["stays"], "a/b").unwrap().as_str(),
            "http://host/api/stays/a%2Fb"
        );
        assert_eq!(
            backend
                .stay_endpoint(&["stays", "reservations"], "7?cascade=true")
                .unwrap()
                .as_str(),
            "http://host/api/stays/reservations/7%3Fcascade=true"
        );
    }

    #[test]
    fn dot_segment_ids_are_refused() {
        let backend =
            HttpBackend::new("http://host".into(), None, Duration::from_secs(1)).unwrap();
        for id in ["", ".", ".."] {
            assert!(matches!(
                backend.stay_endpoint(&["stays"], id),
                Err(RemoteError::Config(_))
            ));
        }
    }

    #[test]
    fn unparsable_base_url_is_config_error() {
        let result = HttpBackend::new("not a url".into(), None, Duration::from_secs(1));
        assert!(matches!(result, Err(RemoteError::Config(_))));
    }

    #[test]
    fn error_message_falls_back_when_empty() {
        assert_eq!(error_message("", LIST_STAYS_FAILED), LIST_STAYS_FAILED);
        assert_eq!(error_message(r#"{"status": 500}"#, "fallback"), "fallback");
    }

    #[tokio::test]
    async fn missing_token_fails_without_request() {
        // Port 9 (discard) is never contacted: the token check runs first.
        let backend =
            HttpBackend::new("http://127.0.0.1:9".to_string(), None, Duration::from_secs(1))
                .unwrap();
        let result = backend.list_stays_for_host().await;
        assert!(matches!(result, Err(RemoteError::Config(_))));
    }
}

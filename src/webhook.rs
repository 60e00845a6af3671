use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Wire body for every upstream call. The webhook contract is fixed:
/// camelCase keys, both fields always present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookRequest<'a> {
    session_id: &'a str,
    input: &'a str,
}

/// Raw result of one upstream call: status, declared content type, and the
/// body as text. Consumed by the normalizer right away, never cached.
#[derive(Debug, Clone)]
pub struct UpstreamEnvelope {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl UpstreamEnvelope {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Only transport-level failures escape as errors; HTTP-level failures come
/// back as data in the envelope so the caller can pass the status through.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the upstream conversational webhook.
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// One POST per user turn. No retry and no relay-imposed timeout; the
    /// transport's own behavior applies.
    pub async fn send(
        &self,
        session_id: &str,
        input: &str,
    ) -> Result<UpstreamEnvelope, WebhookError> {
        let response = self
            .http
            .post(&self.url)
            .json(&WebhookRequest { session_id, input })
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        debug!(status, "webhook responded");
        trace!(%body, "webhook raw body");

        Ok(UpstreamEnvelope {
            status,
            content_type,
            body,
        })
    }
}

use std::env;

use uuid::Uuid;

/// Webhook endpoint of the reference n8n workflow; overridable per deploy.
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.brenops.com/webhook/forecast-query";

const DEFAULT_PORT: u16 = 3001;

/// Everything the relay reads from the environment. `.env` files are loaded
/// by the binaries before this is built.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub webhook_url: String,
    /// Fixed session identifier, when pinned via `SESSION_ID`.
    pub session_id: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(),
            webhook_url: resolve_webhook_url(),
            session_id: resolve_session_id(),
        }
    }

    /// Identifier the session tracker starts with. A pinned `SESSION_ID`
    /// reproduces the reference single-session behavior; otherwise each
    /// relay process opens its own upstream conversation.
    pub fn initial_session_id(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_webhook_url() -> String {
    match env::var("WEBHOOK_URL") {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_WEBHOOK_URL.to_string(),
    }
}

fn resolve_session_id() -> Option<String> {
    env::var("SESSION_ID")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_session(session_id: Option<&str>) -> RelayConfig {
        RelayConfig {
            port: DEFAULT_PORT,
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            session_id: session_id.map(str::to_string),
        }
    }

    #[test]
    fn test_pinned_session_id_wins() {
        let config = config_with_session(Some("test1"));
        assert_eq!(config.initial_session_id(), "test1");
    }

    #[test]
    fn test_generated_session_ids_are_unique() {
        let config = config_with_session(None);
        let first = config.initial_session_id();
        let second = config.initial_session_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}

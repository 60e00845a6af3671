use serde_json::Value;
use tracing::warn;

/// Candidate keys for the display text, tried in priority order. The
/// workflow has renamed this field across versions, so new aliases are
/// appended here instead of branching in code.
pub const REPLY_FIELDS: &[&str] = &["response_text", "reply", "response", "message", "output"];

const QUERY_FIELD: &str = "query";
const SESSION_FIELD: &str = "sessionId";

/// What one upstream body normalized down to. `text` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    pub text: String,
    pub query: Option<String>,
    pub session_id: Option<String>,
}

impl NormalizedReply {
    fn raw(body: &str) -> Self {
        Self {
            text: body.to_string(),
            query: None,
            session_id: None,
        }
    }
}

/// Reduce an upstream 2xx body to a display string plus the optional SQL and
/// session id riding along with it. Shape drift degrades the richness of the
/// result; it never produces an error.
pub fn normalize(content_type: Option<&str>, body: &str) -> NormalizedReply {
    if !declares_json(content_type) {
        return NormalizedReply::raw(body);
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "webhook body declared JSON but did not parse, using raw text");
            return NormalizedReply::raw(body);
        }
    };

    NormalizedReply {
        text: extract_text(&value),
        query: non_empty_string(value.get(QUERY_FIELD)),
        session_id: non_empty_string(value.get(SESSION_FIELD)),
    }
}

fn declares_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains("application/json"))
}

fn extract_text(value: &Value) -> String {
    for field in REPLY_FIELDS {
        if let Some(text) = non_empty_string(value.get(*field)) {
            return text;
        }
    }
    // Nothing recognizable; the stringified payload at least shows what the
    // workflow sent back.
    value.to_string()
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

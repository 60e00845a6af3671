use serde::{Deserialize, Serialize};

/// Body accepted by `POST /api/chat`. A missing `message` key deserializes
/// to an empty string and is rejected by the same validation as a blank one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// The relay's success contract: the display text plus the generated SQL
/// when the workflow produced one. `query` serializes as an explicit `null`
/// so the view never has to probe for a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    pub text: String,
    pub query: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// One exchange in the transcript, as the conversation view stores it. The
/// view appends turns and never mutates them; the relay defines the shape
/// and the mapping from call outcomes so both sides agree on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            query: None,
        }
    }

    /// Agent turn from a successful reply envelope. The normalizer guarantees
    /// the text is never empty.
    pub fn agent(reply: ReplyEnvelope) -> Self {
        Self {
            role: Role::Agent,
            text: reply.text,
            query: reply.query,
        }
    }

    /// Failed calls still land in the transcript as an agent-authored line
    /// rather than halting the session.
    pub fn agent_error(message: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            text: format!("❌ {}", message.into()),
            query: None,
        }
    }
}

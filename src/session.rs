use tokio::sync::RwLock;

/// Holds the one active session identifier the upstream workflow uses for
/// conversational memory. The identifier is only ever replaced when the
/// upstream hands back a new one; there is no history and no rollback.
pub struct SessionTracker {
    current: RwLock<String>,
}

impl SessionTracker {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(initial.into()),
        }
    }

    /// Identifier to send on the next upstream call.
    pub async fn current(&self) -> String {
        self.current.read().await.clone()
    }

    /// Adopt a replacement identifier from an upstream response. Absent or
    /// empty candidates leave the current value untouched; this is the only
    /// mutation path. Concurrent turns race here and the last writer wins.
    pub async fn maybe_adopt(&self, candidate: Option<&str>) {
        let Some(candidate) = candidate else { return };
        if candidate.is_empty() {
            return;
        }
        let mut current = self.current.write().await;
        if *current != candidate {
            tracing::debug!(%candidate, "adopting webhook-assigned session id");
        }
        *current = candidate.to_string();
    }
}

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store of admin bearer tokens with an active login.
///
/// Login is the only writer, the authorization gate is the only reader, and
/// the store is threaded through router state rather than living in a
/// global. Entries have no expiry; they last for the life of the process.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful admin login.
    pub async fn insert(&self, token: impl Into<String>) {
        self.tokens.write().await.insert(token.into());
    }

    /// Whether this token has an active login ("already logged in" fast path).
    pub async fn contains(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_contains() {
        let sessions = SessionStore::new();
        assert!(!sessions.contains("abc").await);

        sessions.insert("abc").await;
        assert!(sessions.contains("abc").await);
        assert!(!sessions.contains("other").await);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let sessions = SessionStore::new();
        let other = sessions.clone();

        sessions.insert("abc").await;
        assert!(other.contains("abc").await);
    }
}

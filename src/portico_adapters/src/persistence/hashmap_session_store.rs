use std::collections::HashMap;
use std::sync::Arc;

use portico_core::{Session, SessionId, SessionStore, SessionStoreError, Username};
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drop every expired session. Lookups already ignore them; this only
    /// reclaims memory.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        before - sessions.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create(&self, session: Session) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some(session) if session.is_expired() => {
                sessions.remove(id);
                Ok(None)
            }
            Some(session) => Ok(Some(session.clone())),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id);
        Ok(())
    }

    async fn delete_for_user(&self, username: &Username) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.username() != username);
        Ok(())
    }
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use portico_core::{Session, SessionId, SessionStore, SessionStoreError, Username};
use redis::{Commands, Connection};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Session store in Redis. Each session is a JSON value expiring with the
/// session; a per-user set of ids backs `delete_for_user`.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    username: String,
    expires_at: i64,
}

impl StoredSession {
    fn into_session(self, id: SessionId) -> Result<Session, SessionStoreError> {
        let username = Username::try_from(self.username).map_err(unexpected)?;
        let expires_at = DateTime::<Utc>::from_timestamp(self.expires_at, 0)
            .ok_or_else(|| unexpected("session expiry out of range"))?;
        Ok(Session::restore(id, username, expires_at))
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, session: Session) -> Result<(), SessionStoreError> {
        let ttl = (session.expires_at() - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Ok(());
        }

        let value = serde_json::to_string(&StoredSession {
            username: session.username().to_string(),
            expires_at: session.expires_at().timestamp(),
        })
        .map_err(unexpected)?;

        let user_key = get_user_key(session.username());
        let mut conn = self.conn.write().await;
        let _: () = conn
            .set_ex(get_key(&session.id()), value, ttl as u64)
            .map_err(unexpected)?;
        let _: usize = conn
            .sadd(&user_key, session.id().to_string())
            .map_err(unexpected)?;
        let _: bool = conn.expire(&user_key, ttl).map_err(unexpected)?;
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        let mut conn = self.conn.write().await;
        let value: Option<String> = conn.get(get_key(id)).map_err(unexpected)?;

        let Some(value) = value else {
            return Ok(None);
        };

        let stored: StoredSession = serde_json::from_str(&value).map_err(unexpected)?;
        let session = stored.into_session(*id)?;
        if session.is_expired() {
            let _: usize = conn.del(get_key(id)).map_err(unexpected)?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.write().await;
        let _: usize = conn.del(get_key(id)).map_err(unexpected)?;
        Ok(())
    }

    async fn delete_for_user(&self, username: &Username) -> Result<(), SessionStoreError> {
        let user_key = get_user_key(username);
        let mut conn = self.conn.write().await;

        let ids: Vec<String> = conn.smembers(&user_key).map_err(unexpected)?;
        for id in ids {
            let _: usize = conn
                .del(format!("{SESSION_KEY_PREFIX}{id}"))
                .map_err(unexpected)?;
        }
        let _: usize = conn.del(&user_key).map_err(unexpected)?;
        Ok(())
    }
}

const SESSION_KEY_PREFIX: &str = "session:";
const USER_SESSIONS_KEY_PREFIX: &str = "user_sessions:";

fn get_key(id: &SessionId) -> String {
    format!("{SESSION_KEY_PREFIX}{id}")
}

fn get_user_key(username: &Username) -> String {
    format!("{USER_SESSIONS_KEY_PREFIX}{username}")
}

fn unexpected(e: impl ToString) -> SessionStoreError {
    SessionStoreError::DatabaseError(e.to_string())
}

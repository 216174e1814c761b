use std::fmt;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::username::Username;

#[derive(Debug, Error)]
#[error("Malformed session id")]
pub struct SessionIdError;

/// Opaque token handed to the client in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, SessionIdError> {
        Uuid::parse_str(value).map(Self).map_err(|_| SessionIdError)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Server-side record behind a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    username: Username,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `username` with a fresh id.
    pub fn start(username: Username, ttl: Duration) -> Self {
        Self {
            id: SessionId::generate(),
            username,
            expires_at: Utc::now() + ttl,
        }
    }

    /// Rebuild a session read back from a store.
    pub fn restore(id: SessionId, username: Username, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            expires_at,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            username: self.username,
            session_id: self.id,
        }
    }
}

/// The signed-in user behind the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
    pub session_id: SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::try_from("alice").unwrap()
    }

    #[test]
    fn session_id_round_trips_through_its_display_form() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn garbage_is_not_a_session_id() {
        assert!(SessionId::parse("not-a-session").is_err());
        assert!(SessionId::parse("").is_err());
    }

    #[test]
    fn fresh_sessions_get_distinct_ids() {
        let a = Session::start(alice(), Duration::hours(1));
        let b = Session::start(alice(), Duration::hours(1));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn session_expires_at_its_deadline() {
        let session = Session::start(alice(), Duration::seconds(60));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.expires_at()));
        assert!(!session.is_expired_at(session.expires_at() - Duration::seconds(1)));
    }
}

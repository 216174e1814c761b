use portico_core::{Identity, SessionId, SessionStore, SessionStoreError};

#[derive(Debug, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Turns the session id a request carries into the current identity.
pub struct ResolveSessionUseCase<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> ResolveSessionUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    /// `None` means anonymous: unknown, expired or deleted session.
    pub async fn execute(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Identity>, ResolveSessionError> {
        let session = self.session_store.get(session_id).await?;

        Ok(session
            .filter(|session| !session.is_expired())
            .map(|session| session.into_identity()))
    }
}

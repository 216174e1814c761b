use chrono::Duration;
use portico_core::{
    Password, Session, SessionId, SessionStore, SessionStoreError, UserStore, UserStoreError,
    Username,
};

/// Error types for login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound | UserStoreError::IncorrectPassword => {
                LoginError::InvalidCredentials
            }
            e => LoginError::UserStoreError(e),
        }
    }
}

/// Login use case - verifies credentials and starts a new session
pub struct LoginUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    user_store: &'a U,
    session_store: &'a S,
    session_ttl: Duration,
}

impl<'a, U, S> LoginUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    pub fn new(user_store: &'a U, session_store: &'a S, session_ttl: Duration) -> Self {
        Self {
            user_store,
            session_store,
            session_ttl,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - Submitted username
    /// * `password` - Submitted password
    /// * `previous_session` - Session the request arrived with, if any. It is
    ///   discarded so a pre-login session id never carries over.
    ///
    /// # Returns
    /// The freshly created session
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: &Username,
        password: &Password,
        previous_session: Option<SessionId>,
    ) -> Result<Session, LoginError> {
        let user = self.user_store.authenticate_user(username, password).await?;

        if let Some(previous) = previous_session {
            self.session_store.delete(&previous).await?;
        }

        let session = Session::start(user.into_username(), self.session_ttl);
        self.session_store.create(session.clone()).await?;

        tracing::info!(session_expires_at = %session.expires_at(), "Session started");
        Ok(session)
    }
}

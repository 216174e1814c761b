use chrono::Duration;
use portico_core::{
    Identity, Session, SessionStore, SessionStoreError, UserStore, UserStoreError,
    ValidPasswordChange,
};

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Old password is incorrect")]
    IncorrectOldPassword,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Change password use case - replaces the signed-in user's password
pub struct ChangePasswordUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    user_store: &'a U,
    session_store: &'a S,
    session_ttl: Duration,
}

impl<'a, U, S> ChangePasswordUseCase<'a, U, S>
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

    /// Execute the change password use case
    ///
    /// Every existing session of the user is ended, including the current
    /// one; a replacement session is returned so the caller stays signed in.
    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, identity, change),
        fields(username = %identity.username)
    )]
    pub async fn execute(
        &self,
        identity: &Identity,
        change: ValidPasswordChange,
    ) -> Result<Session, ChangePasswordError> {
        let username = &identity.username;

        self.user_store
            .authenticate_user(username, &change.old_password)
            .await
            .map_err(|e| match e {
                UserStoreError::IncorrectPassword | UserStoreError::UserNotFound => {
                    ChangePasswordError::IncorrectOldPassword
                }
                e => e.into(),
            })?;

        self.user_store
            .set_new_password(username, change.new_password)
            .await?;

        self.session_store.delete_for_user(username).await?;

        let session = Session::start(username.clone(), self.session_ttl);
        self.session_store.create(session.clone()).await?;

        tracing::info!("Password changed, other sessions ended");
        Ok(session)
    }
}

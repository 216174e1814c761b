use chrono::Duration;
use portico_core::{
    Session, SessionId, SessionStore, User, UserStore, UserStoreError, ValidRegistration,
};

use super::login::{LoginError, LoginUseCase};

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Could not sign in the new user: {0}")]
    LoginError(#[from] LoginError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => RegisterError::UsernameTaken,
            e => RegisterError::UserStoreError(e),
        }
    }
}

/// Register use case - creates the account, then signs the new user in
pub struct RegisterUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    user_store: &'a U,
    session_store: &'a S,
    session_ttl: Duration,
}

impl<'a, U, S> RegisterUseCase<'a, U, S>
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

    /// Execute the register use case
    ///
    /// Username uniqueness is decided by the store at insert time and comes
    /// back as `RegisterError::UsernameTaken`. On success the user is
    /// authenticated with the credentials just submitted.
    ///
    /// # Returns
    /// The session of the newly registered user
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, registration),
        fields(username = %registration.username)
    )]
    pub async fn execute(
        &self,
        registration: ValidRegistration,
        previous_session: Option<SessionId>,
    ) -> Result<Session, RegisterError> {
        let ValidRegistration { username, password } = registration;

        self.user_store
            .add_user(User::new(username.clone(), password.clone()))
            .await?;

        tracing::info!("User registered");

        let session = LoginUseCase::new(self.user_store, self.session_store, self.session_ttl)
            .execute(&username, &password, previous_session)
            .await?;

        Ok(session)
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::Password,
    session::{Session, SessionId},
    user::{User, UserAccount, ValidatedUser},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::IncorrectPassword, Self::IncorrectPassword)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `UserAlreadyExists` when the username is taken.
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, username: &Username) -> Result<UserAccount, UserStoreError>;
    /// Verify a credential and stamp the account's `last_login`.
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ValidatedUser, UserStoreError>;
    async fn set_new_password(
        &self,
        username: &Username,
        new_password: Password,
    ) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> Result<(), SessionStoreError>;
    /// Look a session up. Expired sessions are dropped and reported as absent.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
    /// End every session belonging to `username`.
    async fn delete_for_user(&self, username: &Username) -> Result<(), SessionStoreError>;
}

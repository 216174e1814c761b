use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use portico_application::{
    ChangePasswordError, LoginError, LogoutError, RegisterError, ResolveSessionError,
};
use portico_core::{SessionStoreError, UserStoreError};
use thiserror::Error;

/// Anything a page handler cannot turn into a page. Always answered with 500.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),

    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Server Error (500)</h1>"),
        )
            .into_response()
    }
}

impl From<LoginError> for WebError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(e) => e.into(),
            LoginError::SessionStoreError(e) => e.into(),
            LoginError::InvalidCredentials => WebError::UnexpectedError(error.to_string()),
        }
    }
}

impl From<RegisterError> for WebError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::LoginError(e) => e.into(),
            RegisterError::UsernameTaken => WebError::UnexpectedError(error.to_string()),
        }
    }
}

impl From<ChangePasswordError> for WebError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::UserStoreError(e) => e.into(),
            ChangePasswordError::SessionStoreError(e) => e.into(),
            ChangePasswordError::IncorrectOldPassword => {
                WebError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<LogoutError> for WebError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<ResolveSessionError> for WebError {
    fn from(error: ResolveSessionError) -> Self {
        match error {
            ResolveSessionError::SessionStoreError(e) => e.into(),
        }
    }
}

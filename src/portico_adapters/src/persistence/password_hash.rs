//! Argon2id hashing shared by every user store.
//!
//! Both directions are CPU-bound, so they run on the blocking pool inside
//! the caller's span.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use portico_core::{Password, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Outcome of a failed verification. Only `Mismatch` means a wrong password;
/// anything else is a broken stored hash or a failed worker.
#[derive(Debug, Error, PartialEq)]
pub enum PasswordHashError {
    #[error("Password does not match the stored hash")]
    Mismatch,
    #[error("Password hash error: {0}")]
    UnexpectedError(String),
}

impl From<PasswordHashError> for UserStoreError {
    fn from(error: PasswordHashError) -> Self {
        match error {
            PasswordHashError::Mismatch => UserStoreError::IncorrectPassword,
            PasswordHashError::UnexpectedError(e) => UserStoreError::UnexpectedError(e),
        }
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), PasswordHashError> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;

            hasher()
                .map_err(PasswordHashError::UnexpectedError)?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| match e {
                    password_hash::Error::Password => PasswordHashError::Mismatch,
                    e => PasswordHashError::UnexpectedError(e.to_string()),
                })
        })
    })
    .await
    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

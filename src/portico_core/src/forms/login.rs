use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{FormErrors, INVALID_LOGIN, REQUIRED, empty_secret};
use crate::domain::{password::Password, username::Username};

/// Raw fields submitted to the login page.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    /// Where to send the user after a successful login.
    pub next: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidLogin {
    pub username: Username,
    pub password: Password,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: Secret::new(password.to_owned()),
            next: None,
        }
    }

    pub fn username(&self) -> &str {
        self.username.trim()
    }

    /// The `next` target, if it is safe to redirect to.
    pub fn safe_next(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| is_safe_local_path(next))
    }

    pub fn validate(&self) -> Result<ValidLogin, FormErrors> {
        let mut errors = FormErrors::new();

        if self.username().is_empty() {
            errors.add("username", REQUIRED);
        }
        if self.password.expose_secret().is_empty() {
            errors.add("password", REQUIRED);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        // A name that could never have been registered cannot log in either.
        let (Ok(username), Ok(password)) = (
            Username::try_from(self.username()),
            Password::try_from(self.password.clone()),
        ) else {
            errors.add_non_field(INVALID_LOGIN);
            return Err(errors);
        };

        Ok(ValidLogin { username, password })
    }
}

/// True for same-origin absolute paths such as `/special/?page=2`.
///
/// Rejects scheme-relative (`//host`) and backslash tricks browsers
/// normalise into another origin.
pub fn is_safe_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/\\")
        && !path.chars().any(|c| c.is_control())
}

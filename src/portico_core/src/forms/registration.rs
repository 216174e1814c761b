use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{FormErrors, PASSWORD_MISMATCH, REQUIRED, empty_secret, password_policy};
use crate::domain::{password::Password, username::Username};

/// Raw fields submitted to the registration page.
#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password1: Secret<String>,
    #[serde(default = "empty_secret")]
    pub password2: Secret<String>,
}

/// A registration that passed every rule except username uniqueness,
/// which only the user store can decide.
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub username: Username,
    pub password: Password,
}

impl RegistrationForm {
    pub fn new(username: &str, password1: &str, password2: &str) -> Self {
        Self {
            username: username.to_owned(),
            password1: Secret::new(password1.to_owned()),
            password2: Secret::new(password2.to_owned()),
        }
    }

    /// Username as it should be echoed back when the form is re-rendered.
    pub fn username(&self) -> &str {
        self.username.trim()
    }

    pub fn validate(&self) -> Result<ValidRegistration, FormErrors> {
        let mut errors = FormErrors::new();

        let username = Username::try_from(self.username())
            .map_err(|e| errors.add("username", e.to_string()))
            .ok();

        let password1 = self.password1.expose_secret();
        let password2 = self.password2.expose_secret();

        if password1.is_empty() {
            errors.add("password1", REQUIRED);
        }
        if password2.is_empty() {
            errors.add("password2", REQUIRED);
        }

        if !password1.is_empty() && !password2.is_empty() {
            if password1 != password2 {
                errors.add("password2", PASSWORD_MISMATCH);
            } else {
                let raw_username = Some(self.username()).filter(|u| !u.is_empty());
                for failure in password_policy::validate_password(password2, raw_username) {
                    errors.add("password2", failure);
                }
            }
        }

        match (username, Password::try_from(self.password1.clone())) {
            (Some(username), Ok(password)) if errors.is_empty() => {
                Ok(ValidRegistration { username, password })
            }
            _ => Err(errors),
        }
    }
}

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{FormErrors, PASSWORD_MISMATCH, REQUIRED, empty_secret, password_policy};
use crate::domain::{password::Password, username::Username};

/// Raw fields submitted to the password change page.
#[derive(Debug, Deserialize)]
pub struct PasswordChangeForm {
    #[serde(default = "empty_secret")]
    pub old_password: Secret<String>,
    #[serde(default = "empty_secret")]
    pub new_password1: Secret<String>,
    #[serde(default = "empty_secret")]
    pub new_password2: Secret<String>,
}

/// Whether `old_password` is correct is for the user store to decide.
#[derive(Debug, Clone)]
pub struct ValidPasswordChange {
    pub old_password: Password,
    pub new_password: Password,
}

impl PasswordChangeForm {
    pub fn new(old_password: &str, new_password1: &str, new_password2: &str) -> Self {
        Self {
            old_password: Secret::new(old_password.to_owned()),
            new_password1: Secret::new(new_password1.to_owned()),
            new_password2: Secret::new(new_password2.to_owned()),
        }
    }

    pub fn validate(&self, username: &Username) -> Result<ValidPasswordChange, FormErrors> {
        let mut errors = FormErrors::new();

        let old_password = Password::try_from(self.old_password.clone())
            .map_err(|_| errors.add("old_password", REQUIRED))
            .ok();

        let new_password1 = self.new_password1.expose_secret();
        let new_password2 = self.new_password2.expose_secret();

        if new_password1.is_empty() {
            errors.add("new_password1", REQUIRED);
        }
        if new_password2.is_empty() {
            errors.add("new_password2", REQUIRED);
        }

        if !new_password1.is_empty() && !new_password2.is_empty() {
            if new_password1 != new_password2 {
                errors.add("new_password2", PASSWORD_MISMATCH);
            } else {
                for failure in
                    password_policy::validate_password(new_password2, Some(username.as_str()))
                {
                    errors.add("new_password2", failure);
                }
            }
        }

        match (old_password, Password::try_from(self.new_password1.clone())) {
            (Some(old_password), Ok(new_password)) if errors.is_empty() => {
                Ok(ValidPasswordChange {
                    old_password,
                    new_password,
                })
            }
            _ => Err(errors),
        }
    }
}

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

pub const USERNAME_MAX_LENGTH: usize = 150;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern is valid"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("This field is required.")]
    Empty,
    #[error("Ensure this value has at most {USERNAME_MAX_LENGTH} characters (it has {0}).")]
    TooLong(usize),
    #[error(
        "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
    )]
    InvalidCharacters,
}

/// A validated account name.
///
/// Letters and digits are Unicode-aware, so `名前` is as valid as `alice`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = value.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong(length));
        }

        if !USERNAME_PATTERN.is_match(&value) {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

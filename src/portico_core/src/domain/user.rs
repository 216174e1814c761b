use chrono::{DateTime, Utc};

use super::{password::Password, username::Username};

/// A user about to be created. The store hashes the password on insert.
#[derive(Debug, Clone)]
pub struct User {
    username: Username,
    password: Password,
}

impl User {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// A stored account, without its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: Username,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Proof that a username/password pair matched a stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    username: Username,
}

impl ValidatedUser {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn into_username(self) -> Username {
        self.username
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use portico_core::{
    Password, User, UserAccount, UserStore, UserStoreError, Username, ValidatedUser,
};
use secrecy::Secret;
use tokio::sync::RwLock;

use super::password_hash::{compute_password_hash, verify_password_hash};

#[derive(Debug, Clone)]
struct StoredUser {
    password_hash: Secret<String>,
    account: UserAccount,
}

/// Process-local user store. Passwords are hashed exactly as in Postgres.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Username, StoredUser>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to memory", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let account = UserAccount {
            username: user.username().clone(),
            date_joined: Utc::now(),
            last_login: None,
        };
        users.insert(
            user.username().clone(),
            StoredUser {
                password_hash,
                account,
            },
        );
        Ok(())
    }

    async fn get_user(&self, username: &Username) -> Result<UserAccount, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(username)
            .map(|stored| stored.account.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    #[tracing::instrument(name = "Validating user credentials in memory", skip_all)]
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ValidatedUser, UserStoreError> {
        let password_hash = {
            let users = self.users.read().await;
            let stored = users.get(username).ok_or(UserStoreError::UserNotFound)?;
            stored.password_hash.clone()
        };

        verify_password_hash(password_hash, password.clone()).await?;

        let mut users = self.users.write().await;
        if let Some(stored) = users.get_mut(username) {
            stored.account.last_login = Some(Utc::now());
        }

        Ok(ValidatedUser::new(username.clone()))
    }

    #[tracing::instrument(name = "Set new password in memory", skip_all)]
    async fn set_new_password(
        &self,
        username: &Username,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        let stored = users
            .get_mut(username)
            .ok_or(UserStoreError::UserNotFound)?;
        stored.password_hash = password_hash;
        Ok(())
    }
}

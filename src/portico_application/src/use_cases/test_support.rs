//! In-memory stores shared by the use case tests.
//!
//! Passwords are compared in plaintext here; hashing belongs to the real
//! adapters and is tested there.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use portico_core::{
    Password, Session, SessionId, SessionStore, SessionStoreError, User, UserAccount, UserStore,
    UserStoreError, Username, ValidatedUser,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<Username, (String, UserAccount)>>>,
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let account = UserAccount {
            username: user.username().clone(),
            date_joined: Utc::now(),
            last_login: None,
        };
        let password = user.password().as_ref().expose_secret().clone();
        users.insert(user.username().clone(), (password, account));
        Ok(())
    }

    async fn get_user(&self, username: &Username) -> Result<UserAccount, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(username)
            .map(|(_, account)| account.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ValidatedUser, UserStoreError> {
        let mut users = self.users.write().await;
        let (stored, account) = users.get_mut(username).ok_or(UserStoreError::UserNotFound)?;
        if stored != password.as_ref().expose_secret() {
            return Err(UserStoreError::IncorrectPassword);
        }
        account.last_login = Some(Utc::now());
        Ok(ValidatedUser::new(username.clone()))
    }

    async fn set_new_password(
        &self,
        username: &Username,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let (stored, _) = users.get_mut(username).ok_or(UserStoreError::UserNotFound)?;
        *stored = new_password.as_ref().expose_secret().clone();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    pub sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl MockSessionStore {
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn create(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.write().await.insert(session.id(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        // No expiry filtering, so callers' own guards stay observable.
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn delete_for_user(&self, username: &Username) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .retain(|_, s| s.username() != username);
        Ok(())
    }
}

pub fn username(name: &str) -> Username {
    Username::try_from(name).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_string())).unwrap()
}

use chrono::{DateTime, Utc};
use portico_core::{
    Password, User, UserAccount, UserStore, UserStoreError, Username, ValidatedUser,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres};

use super::password_hash::{compute_password_hash, verify_password_hash};

/// User store backed by the `users` table (see `migrations/`).
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    date_joined: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::try_from(row.username)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        Ok(UserAccount {
            username,
            date_joined: row.date_joined,
            last_login: row.last_login,
        })
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        sqlx::query(
            r#"
                INSERT INTO users (username, password_hash)
                VALUES ($1, $2)
            "#,
        )
        .bind(user.username().as_str())
        .bind(password_hash.expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error()
                && db_err.is_unique_violation()
            {
                return UserStoreError::UserAlreadyExists;
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, username: &Username) -> Result<UserAccount, UserStoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT username, date_joined, last_login
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ValidatedUser, UserStoreError> {
        let password_hash: Option<String> = sqlx::query_scalar(
            r#"
                SELECT password_hash
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(password_hash) = password_hash else {
            return Err(UserStoreError::UserNotFound);
        };

        verify_password_hash(Secret::from(password_hash), password.clone()).await?;

        sqlx::query(
            r#"
                UPDATE users
                SET last_login = now()
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(ValidatedUser::new(username.clone()))
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn set_new_password(
        &self,
        username: &Username,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1
                WHERE username = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(username.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

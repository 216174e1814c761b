//! # Portico
//!
//! Facade crate re-exporting the public APIs of the portico components: a
//! small web application with a public home page, a login-gated page,
//! registration, login/logout and password change.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `Session`, the forms and their validation
//! - **Repository traits**: `UserStore`, `SessionStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `RedisSessionStore`, the in-memory stores, the axum routes
//! - **Service**: `WebService`, the router and server entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use portico_core::*;
}

pub use portico_core::{
    FormErrors, Identity, LoginForm, Password, PasswordChangeForm, RegistrationForm, Session,
    SessionId, User, UserAccount, Username, ValidatedUser,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

pub use portico_core::{SessionStore, SessionStoreError, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use portico_application::*;
}

pub use portico_application::{
    ChangePasswordUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase, ResolveSessionUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes, extractors and session middleware
    pub mod http {
        pub use portico_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use portico_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use portico_adapters::config::*;
    }
}

pub use portico_adapters::persistence::{
    HashMapSessionStore, HashMapUserStore, PostgresUserStore, RedisSessionStore,
};

// ============================================================================
// Web Service (Main Entry Point)
// ============================================================================

pub use portico_service::{
    WebService, configure_postgresql, configure_redis, get_postgres_pool, get_redis_client,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub mod domain;
pub mod forms;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    password::{Password, PasswordError},
    session::{Identity, Session, SessionId, SessionIdError},
    user::{User, UserAccount, ValidatedUser},
    username::{Username, UsernameError},
};

pub use forms::{
    FormErrors,
    login::{LoginForm, ValidLogin, is_safe_local_path},
    password_change::{PasswordChangeForm, ValidPasswordChange},
    registration::{RegistrationForm, ValidRegistration},
};

pub use ports::repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError};

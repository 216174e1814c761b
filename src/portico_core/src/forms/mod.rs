//! Request-scoped form structures and their validation rules.
//!
//! Each form deserializes from raw submitted fields and exposes a
//! `validate` method returning either a typed value ready for a use case
//! or a [`FormErrors`] set keyed by field name. Missing fields deserialize
//! as empty so they surface as "required" errors instead of transport
//! failures.

mod errors;
pub mod login;
pub mod password_change;
pub mod password_policy;
pub mod registration;

use secrecy::Secret;

pub use errors::FormErrors;

pub const REQUIRED: &str = "This field is required.";
pub const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const INVALID_LOGIN: &str = "Please enter a correct username and password. Note that both fields may be case-sensitive.";
pub const INCORRECT_OLD_PASSWORD: &str =
    "Your old password was entered incorrectly. Please enter it again.";

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

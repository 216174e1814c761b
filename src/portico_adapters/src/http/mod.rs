pub mod error;
pub mod extractors;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

pub use error::WebError;
pub use extractors::{CurrentIdentity, LoginRequired, LoginUrl, RedirectToLogin};
pub use session::{create_session_cookie, resolve_session};
pub use state::AppState;

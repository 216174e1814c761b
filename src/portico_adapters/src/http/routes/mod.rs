pub mod home;
pub mod login;
pub mod logout;
pub mod password_change;
pub mod register;
pub mod special;

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

pub use home::home;
pub use login::{LoginQuery, login, login_form};
pub use logout::logout;
pub use password_change::{password_change, password_change_done, password_change_form};
pub use register::{register, register_form};
pub use special::special;

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_owned())]).into_response()
}

pub mod env {
    pub const ENV_PREFIX: &str = "PORTICO";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIGURATION_FILE: &str = "configuration/base";

pub const SESSION_COOKIE_NAME: &str = "sessionid";
/// Two weeks.
pub const SESSION_TTL_IN_SECONDS: i64 = 60 * 60 * 24 * 14;

pub const HOME_URL: &str = "/";
pub const LOGIN_URL: &str = "/accounts/login/";
pub const LOGIN_REDIRECT_URL: &str = "/";
pub const LOGOUT_REDIRECT_URL: &str = "/";
pub const PASSWORD_CHANGE_DONE_URL: &str = "/password_change/done/";

pub mod prod {
    pub const APP_HOST: &str = "0.0.0.0";
    pub const APP_PORT: u16 = 3000;
}

pub mod test {
    pub const APP_HOST: &str = "127.0.0.1";
    pub const APP_PORT: u16 = 0;
}

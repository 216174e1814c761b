use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    CONFIGURATION_FILE, LOGIN_REDIRECT_URL, LOGIN_URL, SESSION_COOKIE_NAME,
    SESSION_TTL_IN_SECONDS, env, prod, test,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub redis: RedisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub ttl_in_seconds: i64,
    /// Mark the session cookie `Secure`. Needs HTTPS in front of the service.
    pub secure_cookie: bool,
}

impl SessionSettings {
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_in_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Where the login gate sends anonymous visitors.
    pub login_url: String,
    /// Where a successful login lands when no safe `next` was given.
    pub login_redirect_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    /// Postgres connection string. Without one, users live in memory.
    pub url: Option<Secret<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedisSettings {
    /// Redis host. Without one, sessions live in memory.
    pub host_name: Option<String>,
}

impl Settings {
    /// Load settings from `configuration/base.json` (optional) and
    /// `PORTICO_*` environment variables, after reading a `.env` file if
    /// one exists. Nested keys use `__`, e.g. `PORTICO_SESSION__SECURE_COOKIE`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("application.host", prod::APP_HOST)?
            .set_default("application.port", i64::from(prod::APP_PORT))?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)?
            .set_default("session.ttl_in_seconds", SESSION_TTL_IN_SECONDS)?
            .set_default("session.secure_cookie", true)?
            .set_default("auth.login_url", LOGIN_URL)?
            .set_default("auth.login_redirect_url", LOGIN_REDIRECT_URL)?
            .add_source(File::with_name(CONFIGURATION_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// In-memory settings for tests: ephemeral port, plain-HTTP cookies.
    pub fn for_tests() -> Self {
        Self {
            application: ApplicationSettings {
                host: test::APP_HOST.to_string(),
                port: test::APP_PORT,
            },
            session: SessionSettings {
                cookie_name: SESSION_COOKIE_NAME.to_string(),
                ttl_in_seconds: SESSION_TTL_IN_SECONDS,
                secure_cookie: false,
            },
            auth: AuthSettings {
                login_url: LOGIN_URL.to_string(),
                login_redirect_url: LOGIN_REDIRECT_URL.to_string(),
            },
            database: DatabaseSettings::default(),
            redis: RedisSettings::default(),
        }
    }
}

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use portico_core::Identity;

use super::routes::found;
use crate::config::LOGIN_URL;

/// The identity resolved from the session cookie, if any.
///
/// Inserted into request extensions by [`resolve_session`](super::resolve_session).
/// Requests that never went through it are anonymous.
#[derive(Debug, Clone, Default)]
pub struct CurrentIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentIdentity>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Configured login page, placed next to [`CurrentIdentity`] so the gate
/// does not need router state.
#[derive(Debug, Clone)]
pub struct LoginUrl(pub String);

impl<S> FromRequestParts<S> for LoginUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<LoginUrl>()
            .cloned()
            .unwrap_or_else(|| LoginUrl(LOGIN_URL.to_string())))
    }
}

/// Authentication gate. Extracting it either yields the signed-in identity
/// or rejects with a redirect to the login page, so the handler body never
/// runs for anonymous requests.
#[derive(Debug, Clone)]
pub struct LoginRequired(pub Identity);

impl<S> FromRequestParts<S> for LoginRequired
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(CurrentIdentity(Some(identity))) = parts.extensions.get::<CurrentIdentity>() {
            return Ok(LoginRequired(identity.clone()));
        }

        let Ok(LoginUrl(login_url)) = LoginUrl::from_request_parts(parts, state).await;
        let next = parts
            .uri
            .path_and_query()
            .map(|path| path.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        tracing::debug!(%next, "Anonymous request to a login-required page");
        Err(RedirectToLogin { login_url, next })
    }
}

#[derive(Debug)]
pub struct RedirectToLogin {
    login_url: String,
    next: String,
}

impl RedirectToLogin {
    pub fn location(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("next", &self.next)
            .finish();
        format!("{}?{}", self.login_url, query)
    }
}

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        found(&self.location())
    }
}

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use portico_application::LogoutUseCase;
use portico_core::{SessionStore, UserStore};

use super::found;
use crate::{
    config::LOGOUT_REDIRECT_URL,
    http::{AppState, CurrentIdentity, WebError, session::removal_cookie},
};

/// End the current session, if any, and forget the cookie.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, S>(
    State(state): State<AppState<U, S>>,
    CurrentIdentity(identity): CurrentIdentity,
    jar: CookieJar,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    LogoutUseCase::new(&state.session_store)
        .execute(identity.map(|identity| identity.session_id))
        .await?;

    let jar = jar.remove(removal_cookie(&state.settings.session));
    Ok((jar, found(LOGOUT_REDIRECT_URL)).into_response())
}

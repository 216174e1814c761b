use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use portico_application::ResolveSessionUseCase;
use portico_core::{Session, SessionId, SessionStore, UserStore};

use super::{AppState, CurrentIdentity, LoginUrl, WebError};
use crate::config::SessionSettings;

/// Cookie carrying the session id. No `Max-Age`: expiry is enforced by the
/// session store, the browser only has to hold the id.
pub fn create_session_cookie(session: &Session, settings: &SessionSettings) -> Cookie<'static> {
    Cookie::build((settings.cookie_name.clone(), session.id().to_string()))
        .path("/")
        .http_only(true)
        .secure(settings.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie telling the browser to forget the session id.
pub fn removal_cookie(settings: &SessionSettings) -> Cookie<'static> {
    Cookie::build(settings.cookie_name.clone()).path("/").build()
}

/// Session id carried by the request, if it parses.
pub fn session_id_from_jar(jar: &CookieJar, settings: &SessionSettings) -> Option<SessionId> {
    jar.get(&settings.cookie_name)
        .and_then(|cookie| SessionId::parse(cookie.value()).ok())
}

/// Middleware resolving the session cookie into a [`CurrentIdentity`] once
/// per request. Unknown, malformed and expired ids all resolve to anonymous.
pub async fn resolve_session<U, S>(
    State(state): State<AppState<U, S>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let identity = match session_id_from_jar(&jar, &state.settings.session) {
        Some(session_id) => {
            ResolveSessionUseCase::new(&state.session_store)
                .execute(&session_id)
                .await?
        }
        None => None,
    };

    let extensions = request.extensions_mut();
    extensions.insert(CurrentIdentity(identity));
    extensions.insert(LoginUrl(state.settings.auth.login_url.clone()));

    Ok(next.run(request).await)
}

use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use portico_application::{LoginError, LoginUseCase};
use portico_core::{FormErrors, LoginForm, SessionStore, UserStore, forms::INVALID_LOGIN};
use serde::Deserialize;

use super::found;
use crate::http::{
    AppState, CurrentIdentity, WebError, create_session_cookie,
    templates::{LoginTemplate, render},
};

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[tracing::instrument(name = "Login form", skip_all)]
pub async fn login_form(Query(query): Query<LoginQuery>) -> Result<Html<String>, WebError> {
    render(&LoginTemplate {
        next: query.next.unwrap_or_default(),
        ..LoginTemplate::default()
    })
}

/// Check the credentials and start a fresh session. The session the request
/// arrived with, if any, is discarded.
#[tracing::instrument(name = "Login", skip_all, fields(username = %form.username()))]
pub async fn login<U, S>(
    State(state): State<AppState<U, S>>,
    CurrentIdentity(identity): CurrentIdentity,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return login_page(&form, errors),
    };

    let use_case = LoginUseCase::new(
        &state.user_store,
        &state.session_store,
        state.settings.session.ttl(),
    );

    match use_case
        .execute(
            &credentials.username,
            &credentials.password,
            identity.map(|identity| identity.session_id),
        )
        .await
    {
        Ok(session) => {
            let target = form
                .safe_next()
                .unwrap_or(state.settings.auth.login_redirect_url.as_str());
            let jar = jar.add(create_session_cookie(&session, &state.settings.session));
            Ok((jar, found(target)).into_response())
        }
        Err(LoginError::InvalidCredentials) => {
            tracing::info!("Rejected login");
            let mut errors = FormErrors::new();
            errors.add_non_field(INVALID_LOGIN);
            login_page(&form, errors)
        }
        Err(e) => Err(e.into()),
    }
}

fn login_page(form: &LoginForm, errors: FormErrors) -> Result<Response, WebError> {
    let page = render(&LoginTemplate {
        username: form.username().to_owned(),
        next: form.next.clone().unwrap_or_default(),
        errors,
    })?;
    Ok(page.into_response())
}

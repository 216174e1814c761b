use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use portico_application::{ChangePasswordError, ChangePasswordUseCase};
use portico_core::{
    FormErrors, PasswordChangeForm, SessionStore, UserStore, forms::INCORRECT_OLD_PASSWORD,
};

use super::found;
use crate::{
    config::PASSWORD_CHANGE_DONE_URL,
    http::{
        AppState, LoginRequired, WebError, create_session_cookie,
        templates::{PasswordChangeDoneTemplate, PasswordChangeTemplate, render},
    },
};

#[tracing::instrument(name = "Password change form", skip_all, fields(username = %identity.username))]
pub async fn password_change_form(
    LoginRequired(identity): LoginRequired,
) -> Result<Html<String>, WebError> {
    render(&PasswordChangeTemplate {
        username: identity.username.to_string(),
        errors: FormErrors::new(),
    })
}

/// Replace the password of the signed-in user. Every other session of the
/// user ends; this request gets a fresh one.
#[tracing::instrument(name = "Password change", skip_all, fields(username = %identity.username))]
pub async fn password_change<U, S>(
    State(state): State<AppState<U, S>>,
    LoginRequired(identity): LoginRequired,
    jar: CookieJar,
    Form(form): Form<PasswordChangeForm>,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let change = match form.validate(&identity.username) {
        Ok(change) => change,
        Err(errors) => return password_change_page(&identity.username.to_string(), errors),
    };

    let use_case = ChangePasswordUseCase::new(
        &state.user_store,
        &state.session_store,
        state.settings.session.ttl(),
    );

    match use_case.execute(&identity, change).await {
        Ok(session) => {
            let jar = jar.add(create_session_cookie(&session, &state.settings.session));
            Ok((jar, found(PASSWORD_CHANGE_DONE_URL)).into_response())
        }
        Err(ChangePasswordError::IncorrectOldPassword) => {
            let mut errors = FormErrors::new();
            errors.add("old_password", INCORRECT_OLD_PASSWORD);
            password_change_page(&identity.username.to_string(), errors)
        }
        Err(e) => Err(e.into()),
    }
}

#[tracing::instrument(name = "Password change done", skip_all)]
pub async fn password_change_done(
    LoginRequired(identity): LoginRequired,
) -> Result<Html<String>, WebError> {
    render(&PasswordChangeDoneTemplate {
        username: identity.username.to_string(),
    })
}

fn password_change_page(username: &str, errors: FormErrors) -> Result<Response, WebError> {
    let page = render(&PasswordChangeTemplate {
        username: username.to_owned(),
        errors,
    })?;
    Ok(page.into_response())
}

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use portico_application::{RegisterError, RegisterUseCase};
use portico_core::{
    FormErrors, RegistrationForm, SessionStore, UserStore, forms::USERNAME_TAKEN,
};

use super::found;
use crate::{
    config::HOME_URL,
    http::{
        AppState, CurrentIdentity, WebError, create_session_cookie,
        templates::{RegisterTemplate, render},
    },
};

#[tracing::instrument(name = "Registration form", skip_all)]
pub async fn register_form() -> Result<Html<String>, WebError> {
    render(&RegisterTemplate::default())
}

/// Create the account, sign the new user in and send them home. Invalid
/// submissions and taken usernames re-render the form with errors.
#[tracing::instrument(name = "Register", skip_all, fields(username = %form.username()))]
pub async fn register<U, S>(
    State(state): State<AppState<U, S>>,
    CurrentIdentity(identity): CurrentIdentity,
    jar: CookieJar,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(errors) => return registration_page(&form, errors),
    };

    let use_case = RegisterUseCase::new(
        &state.user_store,
        &state.session_store,
        state.settings.session.ttl(),
    );

    match use_case
        .execute(registration, identity.map(|identity| identity.session_id))
        .await
    {
        Ok(session) => {
            let jar = jar.add(create_session_cookie(&session, &state.settings.session));
            Ok((jar, found(HOME_URL)).into_response())
        }
        Err(RegisterError::UsernameTaken) => {
            let mut errors = FormErrors::new();
            errors.add("username", USERNAME_TAKEN);
            registration_page(&form, errors)
        }
        Err(e) => Err(e.into()),
    }
}

fn registration_page(form: &RegistrationForm, errors: FormErrors) -> Result<Response, WebError> {
    let page = render(&RegisterTemplate {
        username: form.username().to_owned(),
        errors,
    })?;
    Ok(page.into_response())
}

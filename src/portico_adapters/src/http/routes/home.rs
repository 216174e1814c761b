use axum::response::Html;

use crate::http::{
    CurrentIdentity, LoginUrl, WebError,
    templates::{HomeTemplate, render},
};

#[tracing::instrument(name = "Home", skip_all)]
pub async fn home(
    CurrentIdentity(identity): CurrentIdentity,
    LoginUrl(login_url): LoginUrl,
) -> Result<Html<String>, WebError> {
    render(&HomeTemplate {
        username: identity.map(|identity| identity.username.to_string()),
        login_url,
    })
}

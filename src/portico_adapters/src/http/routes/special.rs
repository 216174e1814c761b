use axum::response::Html;

use crate::http::{
    LoginRequired, WebError,
    templates::{SpecialTemplate, render},
};

#[tracing::instrument(name = "Special", skip_all, fields(username = %identity.username))]
pub async fn special(LoginRequired(identity): LoginRequired) -> Result<Html<String>, WebError> {
    render(&SpecialTemplate {
        username: identity.username.to_string(),
    })
}

//! Askama page templates. Sources live in the crate's `templates/` directory
//! and are compiled into the binary.

use askama::Template;
use axum::response::Html;
use portico_core::FormErrors;

use super::WebError;

pub fn render<T: Template>(template: &T) -> Result<Html<String>, WebError> {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub username: Option<String>,
    pub login_url: String,
}

#[derive(Template)]
#[template(path = "special.html")]
pub struct SpecialTemplate {
    pub username: String,
}

#[derive(Template, Default)]
#[template(path = "registration/register.html")]
pub struct RegisterTemplate {
    pub username: String,
    pub errors: FormErrors,
}

#[derive(Template, Default)]
#[template(path = "registration/login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub next: String,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "registration/password_change.html")]
pub struct PasswordChangeTemplate {
    pub username: String,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "registration/password_change_done.html")]
pub struct PasswordChangeDoneTemplate {
    pub username: String,
}

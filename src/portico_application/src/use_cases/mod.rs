pub mod change_password;
pub mod login;
pub mod logout;
pub mod register;
pub mod resolve_session;

#[cfg(test)]
pub(crate) mod test_support;

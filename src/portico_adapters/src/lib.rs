//! Infrastructure for the portico web application: configuration, the
//! user and session stores, and the axum routes that render the pages.

pub mod config;
pub mod http;
pub mod persistence;

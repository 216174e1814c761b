mod helpers;
mod tracing;
mod web_service;

pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use web_service::WebService;

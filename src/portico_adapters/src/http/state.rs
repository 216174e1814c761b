use std::sync::Arc;

use portico_core::{SessionStore, UserStore};

use crate::config::Settings;

/// Router state shared by every page handler.
///
/// Stores are cheap to clone (they wrap an `Arc` or a pool), so the state is
/// cloned per request by axum.
#[derive(Clone)]
pub struct AppState<U, S>
where
    U: UserStore + Clone,
    S: SessionStore + Clone,
{
    pub user_store: U,
    pub session_store: S,
    pub settings: Arc<Settings>,
}

impl<U, S> AppState<U, S>
where
    U: UserStore + Clone,
    S: SessionStore + Clone,
{
    pub fn new(user_store: U, session_store: S, settings: Settings) -> Self {
        Self {
            user_store,
            session_store,
            settings: Arc::new(settings),
        }
    }
}

use axum::{
    Router, middleware,
    routing::{get, post},
};
use portico_adapters::{
    config::Settings,
    http::{
        AppState, resolve_session,
        routes::{
            home, login, login_form, logout, password_change, password_change_done,
            password_change_form, register, register_form, special,
        },
    },
};
use portico_core::{SessionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The portico web application: pages, registration and the login flow.
pub struct WebService {
    router: Router,
}

impl WebService {
    /// Build the router over the given stores.
    ///
    /// # Arguments
    /// * `user_store` - Store for accounts (must be Clone)
    /// * `session_store` - Store for sessions (must be Clone)
    /// * `settings` - Cookie, session lifetime and login URL settings
    ///
    /// Every route runs behind the session middleware, which resolves the
    /// session cookie into the current identity before dispatch.
    pub fn new<U, S>(user_store: U, session_store: S, settings: Settings) -> Self
    where
        U: UserStore + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let state = AppState::new(user_store, session_store, settings);

        let router = Router::new()
            .route("/", get(home))
            .route("/special/", get(special))
            .route("/register/", get(register_form).post(register::<U, S>))
            .route(
                "/password_change/",
                get(password_change_form).post(password_change::<U, S>),
            )
            .route("/password_change/done/", get(password_change_done))
            .route("/accounts/login/", get(login_form).post(login::<U, S>))
            .route("/accounts/logout/", post(logout::<U, S>))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                resolve_session::<U, S>,
            ))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// The router with request tracing, ready to be served or nested.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the web service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Portico listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

use color_eyre::eyre::Result;
use portico::{
    HashMapSessionStore, HashMapUserStore, PostgresUserStore, RedisSessionStore, SessionStore,
    UserStore, WebService, adapters::config::Settings, configure_postgresql, configure_redis,
};
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;
    let listener = TcpListener::bind(settings.application.address()).await?;

    // Postgres when configured, otherwise users live in memory
    match settings.database.url.clone() {
        Some(url) => {
            let user_store = PostgresUserStore::new(configure_postgresql(&url).await?);
            with_session_store(user_store, settings, listener).await
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            with_session_store(HashMapUserStore::new(), settings, listener).await
        }
    }
}

async fn with_session_store<U>(user_store: U, settings: Settings, listener: TcpListener) -> Result<()>
where
    U: UserStore + Clone + 'static,
{
    // Redis when configured, otherwise sessions live in memory
    match settings.redis.host_name.clone() {
        Some(host_name) => {
            let session_store = RedisSessionStore::new(configure_redis(&host_name)?);
            serve(user_store, session_store, settings, listener).await
        }
        None => {
            tracing::warn!("No Redis configured, sessions are kept in memory");
            serve(user_store, HashMapSessionStore::new(), settings, listener).await
        }
    }
}

async fn serve<U, S>(
    user_store: U,
    session_store: S,
    settings: Settings,
    listener: TcpListener,
) -> Result<()>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    tracing::info!("Starting portico...");

    WebService::new(user_store, session_store, settings)
        .run_standalone(listener)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

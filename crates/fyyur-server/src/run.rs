use crate::config::ServerConfig;
use crate::error::Result;
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Router};
use futures::FutureExt;
use fyyur_app::state::AppState;
use fyyur_app::{artist, home, pages, show, venue};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::{debug, info};

pub async fn run(args: ServerConfig) -> Result<()> {
    let state = build_state(&args).await?;
    run_with_state(args, state).await
}

pub async fn run_with_state(args: ServerConfig, state: AppState) -> Result<()> {
    let shutdown = tokio::signal::ctrl_c().map(|_| ());
    run_graceful_with_state(args, state, shutdown).await
}

pub async fn run_graceful_with_state<S>(
    args: ServerConfig,
    state: AppState,
    shutdown_signal: S,
) -> Result<()>
where
    S: std::future::Future<Output = ()> + Send + 'static,
{
    let app = main_router(state, &args);

    let ip: std::net::IpAddr = args.listen_address.parse()?;
    let addr = std::net::SocketAddr::from((ip, args.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    debug!("Server stopped");
    Ok(())
}

fn main_router(state: AppState, args: &ServerConfig) -> Router<()> {
    let expiry = time::Duration::try_from(args.session_expiry).unwrap_or(time::Duration::HOUR);
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(expiry));

    Router::new()
        .merge(home::router())
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
        .fallback(pages::errors::not_found)
        .with_state(state)
        .layer(session_layer)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let data_dir = config.data_dir();
    if !data_dir.is_dir() {
        tokio::fs::create_dir_all(&data_dir).await?;
        info!("Created data directory {}", data_dir.display());
    }

    let pool = fyyur_dal::new_pool_with_timeout(&config.database_url(), config.db_timeout).await?;
    fyyur_dal::migrate(&pool).await?;
    debug!("Database is ready");

    Ok(AppState::new(pool))
}

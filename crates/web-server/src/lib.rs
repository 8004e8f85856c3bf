use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use configuration::settings::Settings;
use engine::{CachedAnalysis, Orchestrator};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub analysis: CachedAnalysis,
}

impl AppState {
    pub fn new(analysis: CachedAnalysis) -> Self {
        Self { analysis }
    }

    /// `Cache-Control` value advertised on successful analysis responses.
    pub fn cache_control(&self) -> String {
        let ttl = self.analysis.ttl().as_secs();
        format!("public, s-maxage={}, stale-while-revalidate={}", ttl, ttl * 2)
    }
}

/// Builds the application router with its middleware stack.
pub fn router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/foda-analysis",
            get(handlers::get_analysis).post(handlers::post_analysis),
        )
        .with_state(state)
        .layer(middleware::from_fn_with_state(request_timeout, handlers::enforce_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// The main function to configure and run the web server.
///
/// Tracing must already be initialised by the caller.
pub async fn run_server(settings: &Settings, addr: SocketAddr) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::with_overrides(&settings.series)?;
    let analysis = CachedAnalysis::new(orchestrator, Duration::from_secs(settings.cache.ttl_secs));
    let state = Arc::new(AppState::new(analysis));
    let app = router(state, Duration::from_millis(settings.backend.request_timeout_ms));

    tracing::info!(
        backend = %settings.backend.base_url,
        cache_ttl_secs = settings.cache.ttl_secs,
        "Web server started and listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
    }
}

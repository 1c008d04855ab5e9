use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod api {
    pub mod retell;
}
pub mod handlers {
    pub mod demo_handlers;
}
pub mod models {
    pub mod demo_models;
}
pub mod utils {
    pub mod validation;
}

use api::retell::{RetellClient, RetellError};
use config::{Config, Environment};
use handlers::demo_handlers;

pub type DemoCallLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// How often fully replenished phone numbers are dropped from the limiter.
pub const RATE_LIMIT_PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Forgets keys whose quota has fully recovered. Returns how many remain.
pub fn prune_limiter(limiter: &DemoCallLimiter) -> usize {
    limiter.retain_recent();
    limiter.shrink_to_fit();
    limiter.len()
}

/// Background task keeping the demo-call limiter from growing without bound.
pub fn spawn_rate_limit_pruning(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let remaining = prune_limiter(&state.demo_call_limiter);
            tracing::debug!("Pruned demo call limiter, {} numbers still tracked", remaining);
        }
    })
}

/// Where validated demo requests go.
#[derive(Debug)]
pub enum CallBackend {
    /// No calling service configured; answers with a synthetic call id.
    Placeholder,
    Retell(RetellClient),
}

pub struct AppState {
    pub config: Config,
    pub call_backend: CallBackend,
    pub demo_call_limiter: DemoCallLimiter,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, RetellError> {
        let call_backend = match &config.retell {
            Some(retell) => CallBackend::Retell(RetellClient::new(retell.clone())?),
            None => CallBackend::Placeholder,
        };
        let demo_call_limiter = RateLimiter::keyed(Quota::per_hour(config.demo_calls_per_hour));
        Ok(Self {
            config,
            call_backend,
            demo_call_limiter,
        })
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);
    match config.environment {
        Environment::Development => cors.allow_origin(Any),
        Environment::Production => {
            cors.allow_origin(AllowOrigin::exact(config.frontend_origin.clone()))
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api_routes = Router::new()
        .route("/api/health", get(demo_handlers::health_check))
        .route(
            "/api/call",
            post(demo_handlers::request_demo_call).fallback(demo_handlers::method_not_allowed),
        );

    Router::new()
        .merge(api_routes)
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

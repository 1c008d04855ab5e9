use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use site_backend::config::Config;
use site_backend::{build_router, spawn_rate_limit_pruning, AppState, CallBackend};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,site_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let _sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let port = config.port;
    let state = Arc::new(AppState::new(config).context("failed to build calling service client")?);
    match &state.call_backend {
        CallBackend::Placeholder => {
            tracing::warn!("RETELL_API_KEY not set, demo calls return placeholder responses")
        }
        CallBackend::Retell(_) => tracing::info!("Outbound demo calls enabled"),
    }
    tracing::info!("Serving frontend from {}", state.config.static_dir.display());

    spawn_rate_limit_pruning(state.clone());

    let app = build_router(state);
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tracing::info!("Starting server on port {}", port);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

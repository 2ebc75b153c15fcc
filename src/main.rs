use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use plant_buddy_backend::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let relay = config.build_relay();

    tracing::info!(
        provider = relay.provider().name(),
        model = relay.provider().model(),
        persona = relay.persona().name(),
        "starting plant backend"
    );

    let state = std::sync::Arc::new(AppState::new(relay));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("plant backend listening on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

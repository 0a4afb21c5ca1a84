pub mod api;
pub mod shared;

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = shared::config::load_config()?;
    std::fs::create_dir_all(&config.storage.building_config_dir)?;

    let state = Arc::new(api::AppState {
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    let app = Router::new()
        .route(
            "/app/",
            get(api::estimation::page_main).post(api::estimation::submit_estimation),
        )
        .route("/app/result/", get(api::estimation::page_result))
        // Trunk output of the frontend crate
        .fallback_service(ServeDir::new(&config.storage.static_dir))
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!("binding estimation form server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

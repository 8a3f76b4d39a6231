//! HTTP server for the import wizard.
pub mod handlers;
pub mod state;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use pmd_importer_pipeline::wizard::ImportWizard;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use self::state::AppState;

/// Creates the router with the wizard and health routes.
pub fn create_app(wizard: Arc<ImportWizard>) -> Router {
    let state = AppState { wizard };

    Router::new()
        .route("/import/step", post(handlers::wizard_step))
        .route("/health", get(handlers::health_check))
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Runs the server on `addr` until ctrl-c.
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Wizard listening on {}", addr);
    info!("- Wizard endpoint: http://{}/import/step", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down wizard");
        })
        .await?;
    Ok(())
}

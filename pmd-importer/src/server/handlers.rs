// HTTP request handlers
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pmd_importer_pipeline::errors::{ImporterError, WizardError};
use pmd_importer_pipeline::wizard::WizardRequest;
use serde_json::json;
use tracing::{error, info};

use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Import wizard is running")
}

/// Wizard endpoint: handles one step and answers with the
/// `{"success": bool, "data": {...}}` envelope.
pub async fn wizard_step(
    State(state): State<AppState>,
    Json(request): Json<WizardRequest>,
) -> impl IntoResponse {
    info!(step = request.step, "Received wizard request");

    match state.wizard.handle(&request).await {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": response
            })),
        ),
        Err(e) => {
            error!(step = request.step, error = %e, "Wizard step failed");
            (
                status_for(&e),
                Json(json!({
                    "success": false,
                    "data": { "message": e.to_string() }
                })),
            )
        }
    }
}

fn status_for(error: &WizardError) -> StatusCode {
    match error {
        WizardError::ConfigurationMissing(_)
        | WizardError::InvalidSetting(_)
        | WizardError::UnsupportedEntitySelection(_)
        | WizardError::UnknownStep(_) => StatusCode::BAD_REQUEST,
        WizardError::Connection(_) => StatusCode::BAD_GATEWAY,
        WizardError::Import(ImporterError::EmptySourceTable(_)) => StatusCode::NOT_FOUND,
        WizardError::Cache(_) | WizardError::Import(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

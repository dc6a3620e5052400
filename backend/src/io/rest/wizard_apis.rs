//! # REST API for the Configuration Wizard
//!
//! Lets a wizard shell ask whether its current step is complete.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;

use crate::domain::commands::wizard::StepCheckCommand;
use crate::domain::wizard::check_step;
use crate::AppState;
use shared::{WizardStepRequest, WizardStepResponse};

/// Create a router for wizard related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/step", post(check_wizard_step))
}

/// Report whether a step can be left and what blocks it
pub async fn check_wizard_step(
    State(state): State<AppState>,
    Json(request): Json<WizardStepRequest>,
) -> impl IntoResponse {
    info!("POST /api/wizard/step - step: {:?}", request.step);

    let command = StepCheckCommand {
        service: request.service,
        configuration: request.configuration,
        step: request.step,
    };

    let result = check_step(&state.validation_service, command);
    let response = WizardStepResponse {
        step: result.step,
        can_advance: result.can_advance,
        errors: result.errors,
        next_step: result.next_step,
    };
    (StatusCode::OK, Json(response)).into_response()
}

//! # REST API Interface Layer
//!
//! HTTP endpoints for the configuration engine. Handlers only map DTOs from
//! the `shared` crate onto domain commands and back; no business logic lives
//! here.

pub mod configuration_apis;
pub mod pricing_apis;
pub mod wizard_apis;

use axum::Router;

use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/configurations", configuration_apis::router())
        .nest("/pricing", pricing_apis::router())
        .nest("/wizard", wizard_apis::router())
}

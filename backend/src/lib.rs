//! # Home Services Backend
//!
//! Pricing and validation engine for home-service subscription
//! configurations (cleaning, cooking, laundry, pest control), exposed over a
//! small REST API.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (booking wizard)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (pricing, validation, configuration reducer)
//! ```
//!
//! There is no storage layer: configurations are handed back to the caller,
//! who owns persistence.

pub mod config;
pub mod domain;
pub mod io;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{EngineConfig, ServerConfig};
use crate::domain::{ConfigurationService, PricingService, ValidationService};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: PricingService,
    pub validation_service: ValidationService,
    pub configuration_service: ConfigurationService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &EngineConfig) -> AppState {
    info!("Setting up domain services");
    let pricing_service = PricingService::with_config(config.pricing.clone());
    let validation_service = ValidationService::new();
    let configuration_service =
        ConfigurationService::new(pricing_service.clone(), config.rooms.minimum_policy);

    AppState {
        pricing_service,
        validation_service,
        configuration_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Result<Router> {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(server.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(app_state))
}

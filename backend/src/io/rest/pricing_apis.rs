//! # REST API for Pricing
//!
//! Endpoint for quoting the price of a configuration.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;

use crate::domain::commands::pricing::PriceQuoteCommand;
use crate::AppState;
use shared::{ConfigurationRequest, PriceQuoteResponse};

/// Create a router for pricing related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote_price))
}

/// Price a configuration with its breakdown
pub async fn quote_price(
    State(state): State<AppState>,
    Json(request): Json<ConfigurationRequest>,
) -> impl IntoResponse {
    info!("POST /api/pricing/quote - service: {}", request.service.id);

    let command = PriceQuoteCommand {
        service: request.service,
        configuration: request.configuration,
    };

    let result = state.pricing_service.quote(command);
    let response = PriceQuoteResponse {
        price: result.price,
        formatted_price: result.formatted_price,
        breakdown: result.breakdown,
    };
    (StatusCode::OK, Json(response)).into_response()
}

//! # REST API for Configurations
//!
//! Endpoints for creating, patching and validating configurations.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::{info, warn};

use crate::domain::commands::configuration::{
    DeriveConfigurationCommand, OpenConfigurationCommand, ValidateConfigurationCommand,
};
use crate::AppState;
use shared::{
    ConfigurationRequest, DefaultConfigurationRequest, DeriveConfigurationRequest,
    DeriveConfigurationResponse,
};

/// Create a router for configuration related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/default", post(default_configuration))
        .route("/derive", post(derive_configuration))
        .route("/validate", post(validate_configuration))
}

/// Fresh configuration for a service, or a restored one when resuming an edit
pub async fn default_configuration(
    State(state): State<AppState>,
    Json(request): Json<DefaultConfigurationRequest>,
) -> impl IntoResponse {
    info!("POST /api/configurations/default - service: {}", request.service.id);

    let command = OpenConfigurationCommand {
        service: request.service,
        existing_configuration: request.existing_configuration,
    };

    let configuration = state.configuration_service.open(command);
    (StatusCode::OK, Json(configuration)).into_response()
}

/// Apply one patch to a configuration
pub async fn derive_configuration(
    State(state): State<AppState>,
    Json(request): Json<DeriveConfigurationRequest>,
) -> impl IntoResponse {
    info!("POST /api/configurations/derive - patch: {:?}", request.patch);

    let command = DeriveConfigurationCommand {
        service: request.service,
        configuration: request.configuration,
        patch: request.patch,
    };

    match state.configuration_service.derive(command) {
        Ok(result) => {
            let response = DeriveConfigurationResponse {
                configuration: result.configuration,
                validation: result.validation,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Rejected configuration patch: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
    }
}

/// Validate a configuration against its service
pub async fn validate_configuration(
    State(state): State<AppState>,
    Json(request): Json<ConfigurationRequest>,
) -> impl IntoResponse {
    info!("POST /api/configurations/validate - service: {}", request.service.id);

    let command = ValidateConfigurationCommand {
        service: request.service,
        configuration: request.configuration,
    };

    let validation = state.validation_service.validate_command(command);
    (StatusCode::OK, Json(validation)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::initialize_backend;
    use axum::body::to_bytes;
    use axum::response::Response;
    use shared::{
        ConfigurationField, ConfigurationPatch, DayOfWeek, Frequency, LaundryDetails, CategoryDetails,
        ServiceCatalogEntry, ServiceCategory, ServiceOption, SubscriptionServiceConfiguration,
        ValidationResult,
    };
    use std::collections::BTreeMap;

    fn create_test_app_state() -> AppState {
        initialize_backend(&EngineConfig::default())
    }

    fn laundry_entry() -> ServiceCatalogEntry {
        ServiceCatalogEntry {
            id: "svc-laundry".to_string(),
            name: "Laundry".to_string(),
            category: ServiceCategory::Laundry,
            price: 1500.0,
            options: vec![ServiceOption {
                id: "wash-fold".to_string(),
                label: "Wash & Fold".to_string(),
                price: 2000.0,
                room_prices: BTreeMap::new(),
            }],
        }
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Failed to parse body")
    }

    #[tokio::test]
    async fn test_default_configuration() {
        let app_state = create_test_app_state();
        let request = DefaultConfigurationRequest {
            service: laundry_entry(),
            existing_configuration: None,
        };

        let response = default_configuration(State(app_state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let configuration: SubscriptionServiceConfiguration = body_json(response).await;
        assert_eq!(configuration.service_id, "svc-laundry");
        assert_eq!(configuration.frequency, Some(Frequency::Weekly));
        assert_eq!(
            configuration.service_details.details,
            CategoryDetails::Laundry(LaundryDetails { laundry_type: None, bags: 1 })
        );
    }

    #[tokio::test]
    async fn test_derive_configuration() {
        let app_state = create_test_app_state();
        let entry = laundry_entry();
        let configuration = app_state.configuration_service.default_configuration(&entry);

        let request = DeriveConfigurationRequest {
            service: entry,
            configuration,
            patch: ConfigurationPatch::SelectServiceOption {
                option_id: "wash-fold".to_string(),
            },
        };
        let response = derive_configuration(State(app_state.clone()), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let derived: DeriveConfigurationResponse = body_json(response).await;
        assert_eq!(
            derived.configuration.service_details.service_option.as_deref(),
            Some("wash-fold")
        );
        assert!(derived.validation.has_error_on(ConfigurationField::ScheduledDays));

        let request = DeriveConfigurationRequest {
            service: laundry_entry(),
            configuration: derived.configuration,
            patch: ConfigurationPatch::ToggleDay { day: DayOfWeek::Monday },
        };
        let response = derive_configuration(State(app_state), Json(request))
            .await
            .into_response();
        let derived: DeriveConfigurationResponse = body_json(response).await;

        // 2000 x 1 bag x 1 day x 4 weekly
        assert_eq!(derived.configuration.price, 8000.0);
    }

    #[tokio::test]
    async fn test_derive_configuration_rejected_patch() {
        let app_state = create_test_app_state();
        let entry = laundry_entry();
        let configuration = app_state.configuration_service.default_configuration(&entry);

        let request = DeriveConfigurationRequest {
            service: entry,
            configuration,
            patch: ConfigurationPatch::SelectServiceOption {
                option_id: "dry-clean".to_string(),
            },
        };

        let response = derive_configuration(State(app_state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_validate_configuration() {
        let app_state = create_test_app_state();
        let entry = laundry_entry();
        let mut configuration = app_state.configuration_service.default_configuration(&entry);
        configuration.frequency = Some(Frequency::Monthly);
        configuration.scheduled_days = vec![DayOfWeek::Monday, DayOfWeek::Tuesday];

        let request = ConfigurationRequest {
            service: entry,
            configuration,
        };
        let response = validate_configuration(State(app_state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let validation: ValidationResult = body_json(response).await;
        assert!(!validation.is_valid);
        assert!(validation.has_error_on(ConfigurationField::ScheduledDays));
    }
}

//! Errors and detail accessors for editing a configuration.
use shared::{
    CategoryDetails, CleaningDetails, CookingDetails, LaundryDetails, PestControlDetails,
    ServiceCategory, SubscriptionServiceConfiguration,
};

/// A patch that cannot be applied to a configuration.
/// Validation findings are not errors; see `ValidationResult`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Cannot edit {attempted} details on a {actual} configuration")]
    DetailsMismatch {
        attempted: ServiceCategory,
        actual: ServiceCategory,
    },
    #[error("Service option not offered by this service: {0}")]
    UnknownServiceOption(String),
    #[error("Only one day can be scheduled for this service, got {count}")]
    TooManyDays { count: usize },
}

fn mismatch(attempted: ServiceCategory, details: &CategoryDetails) -> ConfigurationError {
    ConfigurationError::DetailsMismatch {
        attempted,
        actual: details.category(),
    }
}

pub fn cleaning_details_mut(
    configuration: &mut SubscriptionServiceConfiguration,
) -> Result<&mut CleaningDetails, ConfigurationError> {
    match &mut configuration.service_details.details {
        CategoryDetails::Cleaning(details) => Ok(details),
        other => Err(mismatch(ServiceCategory::Cleaning, other)),
    }
}

pub fn cooking_details_mut(
    configuration: &mut SubscriptionServiceConfiguration,
) -> Result<&mut CookingDetails, ConfigurationError> {
    match &mut configuration.service_details.details {
        CategoryDetails::Cooking(details) => Ok(details),
        other => Err(mismatch(ServiceCategory::Cooking, other)),
    }
}

pub fn laundry_details_mut(
    configuration: &mut SubscriptionServiceConfiguration,
) -> Result<&mut LaundryDetails, ConfigurationError> {
    match &mut configuration.service_details.details {
        CategoryDetails::Laundry(details) => Ok(details),
        other => Err(mismatch(ServiceCategory::Laundry, other)),
    }
}

pub fn pest_control_details_mut(
    configuration: &mut SubscriptionServiceConfiguration,
) -> Result<&mut PestControlDetails, ConfigurationError> {
    match &mut configuration.service_details.details {
        CategoryDetails::PestControl(details) => Ok(details),
        other => Err(mismatch(ServiceCategory::PestControl, other)),
    }
}

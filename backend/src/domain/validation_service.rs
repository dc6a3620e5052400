//! Configuration validation.
//!
//! Checks a configuration against the catalog entry it was built for and
//! returns every failed check as a field-level error. Checks run in a fixed
//! order and never short-circuit, so the error list is complete and
//! deterministic. An invalid configuration is an ordinary result, not a fault.

use log::debug;

use crate::domain::categories::rules_for;
use crate::domain::commands::configuration::ValidateConfigurationCommand;
use crate::domain::schedule_policy::dedupe_days;
use shared::{
    ConfigurationField, Frequency, ServiceCatalogEntry, ServiceCategory,
    SubscriptionServiceConfiguration, ValidationError, ValidationResult,
};

#[derive(Debug, Clone, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        self.check_service(configuration, entry, &mut errors);
        self.check_frequency(configuration, &mut errors);
        self.check_scheduled_days(configuration, &mut errors);
        self.check_time_slot(configuration, &mut errors);
        self.check_details(configuration, entry, &mut errors);
        self.check_service_option(configuration, entry, &mut errors);

        if !errors.is_empty() {
            debug!(
                "Configuration for {} has {} validation errors",
                configuration.service_id,
                errors.len()
            );
        }

        ValidationResult::from_errors(errors)
    }

    pub fn validate_command(&self, command: ValidateConfigurationCommand) -> ValidationResult {
        self.validate(&command.configuration, &command.service)
    }

    fn check_service(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
        errors: &mut Vec<ValidationError>,
    ) {
        if configuration.service_id.trim().is_empty() {
            errors.push(ValidationError::new(
                ConfigurationField::ServiceId,
                "Service is required",
            ));
        } else if configuration.service_id != entry.id {
            errors.push(ValidationError::new(
                ConfigurationField::ServiceId,
                format!("Configuration belongs to service {}, not {}", configuration.service_id, entry.id),
            ));
        }
    }

    fn check_frequency(&self, configuration: &SubscriptionServiceConfiguration, errors: &mut Vec<ValidationError>) {
        match configuration.frequency {
            None => errors.push(ValidationError::new(
                ConfigurationField::Frequency,
                "Please select how often you want this service",
            )),
            Some(frequency)
                if configuration.category == ServiceCategory::PestControl
                    && frequency != Frequency::Monthly =>
            {
                errors.push(ValidationError::new(
                    ConfigurationField::Frequency,
                    "Pest control is only available as a monthly subscription",
                ))
            }
            Some(_) => {}
        }
    }

    fn check_scheduled_days(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        errors: &mut Vec<ValidationError>,
    ) {
        let days = configuration.scheduled_days.len();

        if days == 0 {
            errors.push(ValidationError::new(
                ConfigurationField::ScheduledDays,
                "Please select at least one day",
            ));
        } else if dedupe_days(&configuration.scheduled_days).len() != days {
            errors.push(ValidationError::new(
                ConfigurationField::ScheduledDays,
                "Each day can only be scheduled once",
            ));
        } else if days > 1 && configuration.category == ServiceCategory::PestControl {
            errors.push(ValidationError::new(
                ConfigurationField::ScheduledDays,
                "Pest control visits can only be scheduled on one day",
            ));
        } else if days > 1 && configuration.frequency == Some(Frequency::Monthly) {
            errors.push(ValidationError::new(
                ConfigurationField::ScheduledDays,
                "Monthly services can only be scheduled on one day",
            ));
        }
    }

    fn check_time_slot(&self, configuration: &SubscriptionServiceConfiguration, errors: &mut Vec<ValidationError>) {
        if configuration.preferred_time_slot.is_none() {
            errors.push(ValidationError::new(
                ConfigurationField::PreferredTimeSlot,
                "Please select a preferred time",
            ));
        }
    }

    fn check_details(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
        errors: &mut Vec<ValidationError>,
    ) {
        let details = &configuration.service_details.details;

        if configuration.category != entry.category {
            errors.push(ValidationError::new(
                ConfigurationField::ServiceDetails,
                format!(
                    "A {} configuration cannot be used for a {} service",
                    configuration.category, entry.category
                ),
            ));
            return;
        }

        if details.category() != configuration.category {
            errors.push(ValidationError::new(
                ConfigurationField::ServiceDetails,
                format!(
                    "{} details do not match a {} service",
                    details.category(),
                    configuration.category
                ),
            ));
            return;
        }

        rules_for(configuration.category).validate_details(details, errors);
    }

    fn check_service_option(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
        errors: &mut Vec<ValidationError>,
    ) {
        if !entry.has_options() {
            // Rooms are priced from an option's table, so cleaning cannot go without one
            if configuration.category == ServiceCategory::Cleaning {
                errors.push(ValidationError::new(
                    ConfigurationField::ServiceOption,
                    "This service has no packages available",
                ));
            }
            return;
        }

        match configuration.service_details.service_option.as_deref() {
            None | Some("") => errors.push(ValidationError::new(
                ConfigurationField::ServiceOption,
                "Please select a package",
            )),
            Some(option_id) if entry.find_option(option_id).is_none() => {
                errors.push(ValidationError::new(
                    ConfigurationField::ServiceOption,
                    "The selected package is not available for this service",
                ))
            }
            Some(_) => {}
        }
    }
}

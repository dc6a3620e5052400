//! Wizard step sequencer.
//!
//! A linear four-step cursor (package, property/details, schedule, review)
//! over a configuration. Step completeness is derived from the validator by
//! keeping only the errors on fields a step owns, so the wizard and the
//! validator can never disagree.

use log::info;

use crate::domain::commands::wizard::{StepCheckCommand, StepCheckResult};
use crate::domain::models::configuration::ConfigurationError;
use crate::domain::{ConfigurationService, ValidationService};
use shared::{
    ConfigurationField, ConfigurationPatch, ServiceCatalogEntry, SubscriptionServiceConfiguration,
    ValidationError, ValidationResult, WizardStep,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Step {step:?} is incomplete ({} errors)", .errors.len())]
    StepIncomplete {
        step: WizardStep,
        errors: Vec<ValidationError>,
    },
    #[error("Already on the last step")]
    AtLastStep,
    #[error("Configuration is invalid ({} errors)", .errors.len())]
    InvalidConfiguration { errors: Vec<ValidationError> },
}

/// Fields whose errors block leaving a step. Review owns every field.
pub fn step_fields(step: WizardStep) -> &'static [ConfigurationField] {
    match step {
        WizardStep::Package => &[
            ConfigurationField::ServiceId,
            ConfigurationField::ServiceOption,
            ConfigurationField::CleaningType,
            ConfigurationField::MealType,
        ],
        WizardStep::PropertyOrDetails => &[
            ConfigurationField::ServiceDetails,
            ConfigurationField::HouseType,
            ConfigurationField::Rooms,
            ConfigurationField::MealsPerDelivery,
        ],
        WizardStep::Schedule => &[
            ConfigurationField::Frequency,
            ConfigurationField::ScheduledDays,
            ConfigurationField::PreferredTimeSlot,
        ],
        WizardStep::Review => &[
            ConfigurationField::ServiceId,
            ConfigurationField::Frequency,
            ConfigurationField::ScheduledDays,
            ConfigurationField::PreferredTimeSlot,
            ConfigurationField::ServiceDetails,
            ConfigurationField::HouseType,
            ConfigurationField::CleaningType,
            ConfigurationField::Rooms,
            ConfigurationField::MealType,
            ConfigurationField::MealsPerDelivery,
            ConfigurationField::ServiceOption,
        ],
    }
}

/// Errors from a validation result that belong to a step
pub fn step_errors(step: WizardStep, validation: &ValidationResult) -> Vec<ValidationError> {
    let fields = step_fields(step);
    validation
        .errors
        .iter()
        .filter(|error| fields.contains(&error.field))
        .cloned()
        .collect()
}

/// Check a step of a configuration without holding a session
pub fn check_step(validation_service: &ValidationService, command: StepCheckCommand) -> StepCheckResult {
    let validation = validation_service.validate(&command.configuration, &command.service);
    let errors = step_errors(command.step, &validation);
    let can_advance = errors.is_empty();

    StepCheckResult {
        step: command.step,
        can_advance,
        next_step: if can_advance { command.step.next() } else { None },
        errors,
    }
}

/// One open wizard. Dropping the session cancels it.
#[derive(Debug, Clone)]
pub struct WizardSession {
    entry: ServiceCatalogEntry,
    configuration: SubscriptionServiceConfiguration,
    step: WizardStep,
    configuration_service: ConfigurationService,
    validation_service: ValidationService,
}

impl WizardSession {
    /// Open a wizard on defaults, or on an existing configuration
    pub fn open(
        entry: ServiceCatalogEntry,
        existing_configuration: Option<SubscriptionServiceConfiguration>,
        configuration_service: ConfigurationService,
    ) -> Self {
        let configuration = match existing_configuration {
            Some(existing) => configuration_service.restore_configuration(existing, &entry),
            None => configuration_service.default_configuration(&entry),
        };

        Self {
            entry,
            configuration,
            step: WizardStep::Package,
            configuration_service,
            validation_service: ValidationService::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn configuration(&self) -> &SubscriptionServiceConfiguration {
        &self.configuration
    }

    pub fn price(&self) -> f64 {
        self.configuration.price
    }

    pub fn validation(&self) -> ValidationResult {
        self.validation_service.validate(&self.configuration, &self.entry)
    }

    /// Apply a patch. A rejected patch leaves the configuration unchanged.
    pub fn apply(&mut self, patch: ConfigurationPatch) -> Result<&SubscriptionServiceConfiguration, ConfigurationError> {
        self.configuration = self
            .configuration_service
            .derive_configuration(&self.configuration, patch, &self.entry)?;
        Ok(&self.configuration)
    }

    pub fn can_advance(&self, step: WizardStep) -> bool {
        step_errors(step, &self.validation()).is_empty()
    }

    /// Move to the next step if the current one is complete
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let next_step = self.step.next().ok_or(WizardError::AtLastStep)?;

        let errors = step_errors(self.step, &self.validation());
        if !errors.is_empty() {
            return Err(WizardError::StepIncomplete {
                step: self.step,
                errors,
            });
        }

        self.step = next_step;
        Ok(self.step)
    }

    /// Move to the previous step; stays put on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Hand the finished configuration to the caller's save callback
    pub fn confirm<F>(&self, on_save: F) -> Result<(), WizardError>
    where
        F: FnOnce(SubscriptionServiceConfiguration),
    {
        let configuration = self.complete_configuration()?;
        info!(
            "Saving configuration for service {} at {}",
            configuration.service_id, configuration.price
        );
        on_save(configuration);
        Ok(())
    }

    /// Hand the finished configuration to a direct-purchase checkout callback
    pub fn proceed_to_checkout<F>(&self, on_checkout: F) -> Result<(), WizardError>
    where
        F: FnOnce(SubscriptionServiceConfiguration),
    {
        let configuration = self.complete_configuration()?;
        info!(
            "Proceeding to checkout for service {} at {}",
            configuration.service_id, configuration.price
        );
        on_checkout(configuration);
        Ok(())
    }

    fn complete_configuration(&self) -> Result<SubscriptionServiceConfiguration, WizardError> {
        let validation = self.validation();
        if !validation.is_valid {
            return Err(WizardError::InvalidConfiguration {
                errors: validation.errors,
            });
        }
        Ok(self.configuration.clone())
    }
}

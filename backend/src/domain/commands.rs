//! Domain-level command and result types
//! Services take these as input. The REST layer maps the public DTOs from the
//! `shared` crate onto them and maps results back.

pub mod configuration {
    use shared::{
        ConfigurationPatch, ServiceCatalogEntry, SubscriptionServiceConfiguration, ValidationResult,
    };

    /// Input for opening a wizard: fresh defaults, or a restored configuration.
    #[derive(Debug, Clone)]
    pub struct OpenConfigurationCommand {
        pub service: ServiceCatalogEntry,
        pub existing_configuration: Option<SubscriptionServiceConfiguration>,
    }

    /// Input for applying one patch to a configuration.
    #[derive(Debug, Clone)]
    pub struct DeriveConfigurationCommand {
        pub service: ServiceCatalogEntry,
        pub configuration: SubscriptionServiceConfiguration,
        pub patch: ConfigurationPatch,
    }

    /// Result of applying a patch.
    #[derive(Debug, Clone)]
    pub struct DeriveConfigurationResult {
        pub configuration: SubscriptionServiceConfiguration,
        pub validation: ValidationResult,
    }

    /// Input for validating a configuration.
    #[derive(Debug, Clone)]
    pub struct ValidateConfigurationCommand {
        pub service: ServiceCatalogEntry,
        pub configuration: SubscriptionServiceConfiguration,
    }
}

pub mod pricing {
    use shared::{PriceBreakdown, ServiceCatalogEntry, SubscriptionServiceConfiguration};

    /// Input for pricing a configuration.
    #[derive(Debug, Clone)]
    pub struct PriceQuoteCommand {
        pub service: ServiceCatalogEntry,
        pub configuration: SubscriptionServiceConfiguration,
    }

    /// Result of pricing a configuration.
    #[derive(Debug, Clone)]
    pub struct PriceQuoteResult {
        pub price: f64,
        pub formatted_price: String,
        pub breakdown: PriceBreakdown,
    }
}

pub mod wizard {
    use shared::{ServiceCatalogEntry, SubscriptionServiceConfiguration, ValidationError, WizardStep};

    /// Input for checking whether a wizard step is complete.
    #[derive(Debug, Clone)]
    pub struct StepCheckCommand {
        pub service: ServiceCatalogEntry,
        pub configuration: SubscriptionServiceConfiguration,
        pub step: WizardStep,
    }

    /// Result of a step check.
    #[derive(Debug, Clone)]
    pub struct StepCheckResult {
        pub step: WizardStep,
        pub can_advance: bool,
        pub errors: Vec<ValidationError>,
        pub next_step: Option<WizardStep>,
    }
}

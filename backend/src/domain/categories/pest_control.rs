//! Pest control: option price scaled by severity, visit days and frequency.
//! Billing is monthly; the validator rejects any other frequency.

use super::{breakdown, factor, frequency_factor, mismatched_breakdown, scheduled_days_factor, unit_price, CategoryRules};
use crate::config::RoomMinimumPolicy;
use shared::{
    CategoryDetails, Frequency, PestControlDetails, PriceBreakdown, ServiceCatalogEntry,
    ServiceCategory, Severity, SubscriptionServiceConfiguration, ValidationError,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct PestControlRules;

pub fn severity_multiplier(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 1.0,
        Severity::Medium => 1.5,
        Severity::High => 2.0,
    }
}

impl CategoryRules for PestControlRules {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::PestControl
    }

    fn default_frequency(&self) -> Frequency {
        Frequency::Monthly
    }

    fn default_details(&self, _room_policy: RoomMinimumPolicy) -> CategoryDetails {
        CategoryDetails::PestControl(PestControlDetails {
            treatment_type: None,
            severity: Severity::Low,
            areas: BTreeSet::new(),
        })
    }

    fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown {
        let CategoryDetails::PestControl(details) = &configuration.service_details.details else {
            return mismatched_breakdown(self.category());
        };

        let factors = vec![
            factor("Severity", severity_multiplier(details.severity)),
            scheduled_days_factor(configuration),
            frequency_factor(configuration.frequency),
        ];

        breakdown(self.category(), unit_price(configuration, entry), factors)
    }

    // Frequency and day-count rules are common checks; nothing extra here
    fn validate_details(&self, _details: &CategoryDetails, _errors: &mut Vec<ValidationError>) {}
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use shared::DayOfWeek;

    fn details(severity: Severity) -> CategoryDetails {
        CategoryDetails::PestControl(PestControlDetails {
            treatment_type: Some("Fumigation".to_string()),
            severity,
            areas: BTreeSet::new(),
        })
    }

    #[test]
    fn test_monthly_high_severity() {
        let entry = entry(ServiceCategory::PestControl, vec![option("fumigation", 5000.0)]);
        let configuration = configuration(
            &entry,
            Frequency::Monthly,
            vec![DayOfWeek::Saturday],
            Some("fumigation"),
            details(Severity::High),
        );

        assert_eq!(PestControlRules.price_breakdown(&configuration, &entry).total, 10000.0);
    }

    #[test]
    fn test_no_schedule_prices_zero() {
        let entry = entry(ServiceCategory::PestControl, vec![option("fumigation", 5000.0)]);
        let mut configuration = configuration(
            &entry,
            Frequency::Monthly,
            vec![],
            Some("fumigation"),
            details(Severity::High),
        );
        assert_eq!(PestControlRules.price_breakdown(&configuration, &entry).total, 0.0);

        configuration.scheduled_days = vec![DayOfWeek::Saturday];
        configuration.frequency = None;
        assert_eq!(PestControlRules.price_breakdown(&configuration, &entry).total, 0.0);
    }

    #[test]
    fn test_biweekly_medium_severity() {
        let entry = entry(ServiceCategory::PestControl, vec![option("fumigation", 5000.0)]);
        let configuration = configuration(
            &entry,
            Frequency::BiWeekly,
            vec![DayOfWeek::Saturday],
            Some("fumigation"),
            details(Severity::Medium),
        );

        assert_eq!(PestControlRules.price_breakdown(&configuration, &entry).total, 15000.0);
    }

    #[test]
    fn test_defaults_to_monthly() {
        assert_eq!(PestControlRules.default_frequency(), Frequency::Monthly);
    }
}

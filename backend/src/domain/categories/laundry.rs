//! Laundry: option price per bag, per pickup day, per billing cycle.

use super::{breakdown, factor, frequency_factor, mismatched_breakdown, scheduled_days_factor, unit_price, CategoryRules};
use crate::config::RoomMinimumPolicy;
use shared::{
    CategoryDetails, LaundryDetails, PriceBreakdown, ServiceCatalogEntry, ServiceCategory,
    SubscriptionServiceConfiguration, ValidationError,
};

pub const MIN_BAGS: u32 = 1;
pub const MAX_BAGS: u32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct LaundryRules;

pub fn clamp_bags(bags: u32) -> u32 {
    bags.clamp(MIN_BAGS, MAX_BAGS)
}

impl CategoryRules for LaundryRules {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Laundry
    }

    fn default_details(&self, _room_policy: RoomMinimumPolicy) -> CategoryDetails {
        CategoryDetails::Laundry(LaundryDetails {
            laundry_type: None,
            bags: MIN_BAGS,
        })
    }

    fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown {
        let CategoryDetails::Laundry(details) = &configuration.service_details.details else {
            return mismatched_breakdown(self.category());
        };

        let factors = vec![
            factor("Bags per pickup", f64::from(details.bags)),
            scheduled_days_factor(configuration),
            frequency_factor(configuration.frequency),
        ];

        breakdown(self.category(), unit_price(configuration, entry), factors)
    }

    // Laundry has no structural checks beyond the common ones
    fn validate_details(&self, _details: &CategoryDetails, _errors: &mut Vec<ValidationError>) {}
}

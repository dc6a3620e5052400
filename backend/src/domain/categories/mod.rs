//! # Category Rules
//!
//! Per-category pricing, validation and defaults. Each service category has
//! one rule set implementing [`CategoryRules`]; [`rules_for`] dispatches on
//! the closed set of categories so callers never branch on category
//! themselves.
//!
//! All rule sets share the frequency multiplier table (a month is modeled as
//! roughly four weeks):
//!
//! | Frequency | Multiplier |
//! |-----------|------------|
//! | Weekly    | 4          |
//! | BiWeekly  | 2          |
//! | Monthly   | 1          |

pub mod cleaning;
pub mod cooking;
pub mod laundry;
pub mod pest_control;

use crate::config::RoomMinimumPolicy;
use crate::domain::schedule_policy::dedupe_days;
use shared::{
    CategoryDetails, Frequency, PriceBreakdown, PriceFactor, ServiceCatalogEntry, ServiceCategory,
    SubscriptionServiceConfiguration, ValidationError,
};

pub use cleaning::CleaningRules;
pub use cooking::CookingRules;
pub use laundry::LaundryRules;
pub use pest_control::PestControlRules;

/// Capability set every service category provides
pub trait CategoryRules: Send + Sync {
    fn category(&self) -> ServiceCategory;

    /// Frequency a new configuration starts with
    fn default_frequency(&self) -> Frequency {
        Frequency::Weekly
    }

    /// Detail block a new configuration starts with
    fn default_details(&self, room_policy: RoomMinimumPolicy) -> CategoryDetails;

    /// Unrounded price calculation. Details of another category price at 0.
    fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown;

    /// Append structural errors for this category's detail block.
    /// Only called with details of this category.
    fn validate_details(&self, details: &CategoryDetails, errors: &mut Vec<ValidationError>);
}

/// Rule set for a category
pub fn rules_for(category: ServiceCategory) -> &'static dyn CategoryRules {
    match category {
        ServiceCategory::Cleaning => &CleaningRules,
        ServiceCategory::Cooking => &CookingRules,
        ServiceCategory::Laundry => &LaundryRules,
        ServiceCategory::PestControl => &PestControlRules,
    }
}

/// Billing multiplier for a frequency; no frequency chosen bills nothing
pub fn frequency_multiplier(frequency: Option<Frequency>) -> f64 {
    match frequency {
        Some(Frequency::Weekly) => 4.0,
        Some(Frequency::BiWeekly) => 2.0,
        Some(Frequency::Monthly) => 1.0,
        None => 0.0,
    }
}

/// Price of the selected option, or the entry's base price when none is selected
pub(crate) fn unit_price(
    configuration: &SubscriptionServiceConfiguration,
    entry: &ServiceCatalogEntry,
) -> f64 {
    configuration
        .service_details
        .service_option
        .as_deref()
        .and_then(|option_id| entry.find_option(option_id))
        .map(|option| option.price)
        .unwrap_or(entry.price)
}

pub(crate) fn factor(label: &str, value: f64) -> PriceFactor {
    PriceFactor {
        label: label.to_string(),
        value,
    }
}

pub(crate) fn frequency_factor(frequency: Option<Frequency>) -> PriceFactor {
    let label = match frequency {
        Some(frequency) => format!("{} billing", frequency),
        None => "No frequency selected".to_string(),
    };
    PriceFactor {
        label,
        value: frequency_multiplier(frequency),
    }
}

/// Distinct scheduled days; a repeated weekday is one visit
pub(crate) fn scheduled_days_factor(configuration: &SubscriptionServiceConfiguration) -> PriceFactor {
    factor("Scheduled days", dedupe_days(&configuration.scheduled_days).len() as f64)
}

/// Multiply the base amount through every factor
pub(crate) fn breakdown(
    category: ServiceCategory,
    base_amount: f64,
    factors: Vec<PriceFactor>,
) -> PriceBreakdown {
    let total = factors.iter().fold(base_amount, |total, factor| total * factor.value);
    PriceBreakdown {
        category,
        base_amount,
        factors,
        total,
    }
}

/// Zero breakdown for details that do not belong to the category
pub(crate) fn mismatched_breakdown(category: ServiceCategory) -> PriceBreakdown {
    breakdown(category, 0.0, Vec::new())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use shared::{DayOfWeek, LaundryDetails};

    #[test]
    fn test_rules_for_dispatches_on_category() {
        for category in [
            ServiceCategory::Cleaning,
            ServiceCategory::Cooking,
            ServiceCategory::Laundry,
            ServiceCategory::PestControl,
        ] {
            let rules = rules_for(category);
            assert_eq!(rules.category(), category);
            assert_eq!(
                rules.default_details(RoomMinimumPolicy::default()).category(),
                category
            );
        }
    }

    #[test]
    fn test_frequency_multiplier() {
        assert_eq!(frequency_multiplier(Some(Frequency::Weekly)), 4.0);
        assert_eq!(frequency_multiplier(Some(Frequency::BiWeekly)), 2.0);
        assert_eq!(frequency_multiplier(Some(Frequency::Monthly)), 1.0);
        assert_eq!(frequency_multiplier(None), 0.0);
    }

    #[test]
    fn test_unit_price_falls_back_to_entry_price() {
        let entry = entry(ServiceCategory::Laundry, vec![option("wash-fold", 2000.0)]);
        let details = CategoryDetails::Laundry(LaundryDetails {
            laundry_type: None,
            bags: 1,
        });

        let selected = configuration(&entry, Frequency::Weekly, vec![DayOfWeek::Monday], Some("wash-fold"), details.clone());
        assert_eq!(unit_price(&selected, &entry), 2000.0);

        let unselected = configuration(&entry, Frequency::Weekly, vec![DayOfWeek::Monday], None, details.clone());
        assert_eq!(unit_price(&unselected, &entry), 500.0);

        let unknown = configuration(&entry, Frequency::Weekly, vec![DayOfWeek::Monday], Some("gone"), details);
        assert_eq!(unit_price(&unknown, &entry), 500.0);
    }

    #[test]
    fn test_breakdown_multiplies_factors() {
        let result = breakdown(
            ServiceCategory::Laundry,
            2000.0,
            vec![factor("Bags", 3.0), factor("Scheduled days", 2.0), frequency_factor(Some(Frequency::Monthly))],
        );
        assert_eq!(result.total, 12000.0);
        assert_eq!(result.factors.len(), 3);
        assert_eq!(result.factors[2].label, "Monthly billing");
    }
}

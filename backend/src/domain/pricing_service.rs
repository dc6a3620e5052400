//! Pricing domain logic.
//!
//! Computes the live price of a configuration. Every calculation is a pure
//! function of the configuration and catalog entry, so it is safe to rerun on
//! every change. Rounding, when enabled, is applied once to the final total.

use log::debug;

use crate::config::PricingConfig;
use crate::domain::categories::{mismatched_breakdown, rules_for};
use crate::domain::commands::pricing::{PriceQuoteCommand, PriceQuoteResult};
use shared::{PriceBreakdown, ServiceCatalogEntry, SubscriptionServiceConfiguration};

/// Pricing service dispatching to the catalog entry's category rules
#[derive(Debug, Clone)]
pub struct PricingService {
    config: PricingConfig,
}

impl PricingService {
    pub fn new() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }

    pub fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Itemised price with the rounding policy applied to the total.
    /// A configuration built for another category prices at zero.
    pub fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown {
        if configuration.category != entry.category {
            debug!(
                "Configuration category {} does not match service {} ({})",
                configuration.category, entry.id, entry.category
            );
            return mismatched_breakdown(entry.category);
        }

        let mut breakdown = rules_for(entry.category).price_breakdown(configuration, entry);
        breakdown.total = self.config.rounding.apply(breakdown.total);
        breakdown
    }

    /// Price of a configuration
    pub fn calculate_price(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> f64 {
        self.price_breakdown(configuration, entry).total
    }

    /// Price a configuration for display
    pub fn quote(&self, command: PriceQuoteCommand) -> PriceQuoteResult {
        let breakdown = self.price_breakdown(&command.configuration, &command.service);
        debug!(
            "Quoted {} for service {}: {:?}",
            breakdown.total, command.service.id, breakdown.factors
        );

        PriceQuoteResult {
            price: breakdown.total,
            formatted_price: self.format_price(breakdown.total),
            breakdown,
        }
    }

    /// Format a price with the currency symbol and thousands separators, e.g. "₦20,000"
    pub fn format_price(&self, amount: f64) -> String {
        let whole = amount.round() as i64;
        let digits = whole.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if whole < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.config.currency_symbol, grouped)
    }

    /// Get configuration
    pub fn get_config(&self) -> &PricingConfig {
        &self.config
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundingPolicy;
    use crate::domain::categories::test_support::{configuration, entry, option};
    use shared::{
        CategoryDetails, CleaningDetails, CleaningType, CookingDetails, DayOfWeek, Frequency,
        HouseType, LaundryDetails, MealDelivery, PestControlDetails, RoomKind, ServiceCategory,
        Severity,
    };

    fn create_test_service() -> PricingService {
        PricingService::new()
    }

    fn cleaning_fixture(house_type: HouseType) -> (ServiceCatalogEntry, SubscriptionServiceConfiguration) {
        let mut standard = option("standard", 0.0);
        standard.room_prices.insert(RoomKind::Kitchen, 1000.0);
        standard.room_prices.insert(RoomKind::Bedroom, 1500.0);
        let entry = entry(ServiceCategory::Cleaning, vec![standard]);

        let configuration = configuration(
            &entry,
            Frequency::Weekly,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday],
            Some("standard"),
            CategoryDetails::Cleaning(CleaningDetails {
                cleaning_type: Some(CleaningType::StandardCleaning),
                house_type: Some(house_type),
                rooms: [(RoomKind::Bedroom, 1), (RoomKind::Kitchen, 1)].into_iter().collect(),
            }),
        );
        (entry, configuration)
    }

    #[test]
    fn test_cleaning_scenarios() {
        let service = create_test_service();

        let (entry, flat) = cleaning_fixture(HouseType::Flat);
        assert_eq!(service.calculate_price(&flat, &entry), 20000.0);

        let (entry, duplex) = cleaning_fixture(HouseType::Duplex);
        assert_eq!(service.calculate_price(&duplex, &entry), 30000.0);
    }

    #[test]
    fn test_cooking_scenario() {
        let service = create_test_service();
        let entry = entry(ServiceCategory::Cooking, vec![option("per-meal", 1000.0)]);
        let configuration = configuration(
            &entry,
            Frequency::BiWeekly,
            vec![],
            Some("per-meal"),
            CategoryDetails::Cooking(CookingDetails {
                meal_type: Some("Dinner".to_string()),
                meals_per_delivery: vec![
                    MealDelivery { day: DayOfWeek::Monday, count: 2 },
                    MealDelivery { day: DayOfWeek::Wednesday, count: 2 },
                    MealDelivery { day: DayOfWeek::Friday, count: 3 },
                ],
            }),
        );

        assert_eq!(service.calculate_price(&configuration, &entry), 14000.0);
    }

    #[test]
    fn test_laundry_and_pest_control_scenarios() {
        let service = create_test_service();

        let laundry_entry = entry(ServiceCategory::Laundry, vec![option("wash-fold", 2000.0)]);
        let laundry = configuration(
            &laundry_entry,
            Frequency::Monthly,
            vec![DayOfWeek::Monday, DayOfWeek::Tuesday],
            Some("wash-fold"),
            CategoryDetails::Laundry(LaundryDetails { laundry_type: None, bags: 3 }),
        );
        assert_eq!(service.calculate_price(&laundry, &laundry_entry), 12000.0);

        let pest_entry = entry(ServiceCategory::PestControl, vec![option("general", 5000.0)]);
        let pest = configuration(
            &pest_entry,
            Frequency::Monthly,
            vec![DayOfWeek::Saturday],
            Some("general"),
            CategoryDetails::PestControl(PestControlDetails {
                treatment_type: None,
                severity: Severity::High,
                areas: Default::default(),
            }),
        );
        assert_eq!(service.calculate_price(&pest, &pest_entry), 10000.0);
    }

    #[test]
    fn test_price_is_deterministic() {
        let service = create_test_service();
        let (entry, configuration) = cleaning_fixture(HouseType::Duplex);

        let first = service.price_breakdown(&configuration, &entry);
        let second = service.price_breakdown(&configuration, &entry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mismatched_details_price_zero() {
        let service = create_test_service();
        let (entry, mut configuration) = cleaning_fixture(HouseType::Flat);
        configuration.service_details.details =
            CategoryDetails::Laundry(LaundryDetails { laundry_type: None, bags: 2 });

        assert_eq!(service.calculate_price(&configuration, &entry), 0.0);
    }

    #[test]
    fn test_configuration_for_other_category_prices_zero() {
        let service = create_test_service();
        let cleaning_entry = entry(ServiceCategory::Cleaning, vec![option("standard", 3000.0)]);
        let laundry_entry = entry(ServiceCategory::Laundry, vec![option("standard", 3000.0)]);
        let laundry = configuration(
            &laundry_entry,
            Frequency::Weekly,
            vec![DayOfWeek::Monday],
            Some("standard"),
            CategoryDetails::Laundry(LaundryDetails { laundry_type: None, bags: 2 }),
        );

        assert_eq!(service.calculate_price(&laundry, &laundry_entry), 24000.0);

        let breakdown = service.price_breakdown(&laundry, &cleaning_entry);
        assert_eq!(breakdown.category, ServiceCategory::Cleaning);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn test_rounding_applies_to_total_only() {
        let entry = entry(ServiceCategory::PestControl, vec![option("general", 333.3)]);
        let configuration = configuration(
            &entry,
            Frequency::Monthly,
            vec![DayOfWeek::Saturday],
            Some("general"),
            CategoryDetails::PestControl(PestControlDetails {
                treatment_type: None,
                severity: Severity::Medium,
                areas: Default::default(),
            }),
        );

        let exact = PricingService::new().calculate_price(&configuration, &entry);
        assert!((exact - 499.95).abs() < 1e-9);

        let rounded = PricingService::with_config(PricingConfig {
            rounding: RoundingPolicy::NearestWhole,
            ..PricingConfig::default()
        });
        let breakdown = rounded.price_breakdown(&configuration, &entry);
        assert_eq!(breakdown.total, 500.0);
        assert_eq!(breakdown.base_amount, 333.3);
    }

    #[test]
    fn test_format_price() {
        let service = create_test_service();

        assert_eq!(service.format_price(0.0), "₦0");
        assert_eq!(service.format_price(999.0), "₦999");
        assert_eq!(service.format_price(20000.0), "₦20,000");
        assert_eq!(service.format_price(1234567.4), "₦1,234,567");
    }

    #[test]
    fn test_quote() {
        let service = create_test_service();
        let (entry, configuration) = cleaning_fixture(HouseType::Flat);

        let result = service.quote(PriceQuoteCommand {
            service: entry,
            configuration,
        });

        assert_eq!(result.price, 20000.0);
        assert_eq!(result.formatted_price, "₦20,000");
        assert_eq!(result.breakdown.base_amount, 2500.0);
        assert_eq!(result.breakdown.factors.len(), 4);
    }
}

//! Cooking: per-meal option price times total meals per delivery cycle.
//! Scheduled days are implied by the delivery rows and are not multiplied in.

use super::{breakdown, factor, frequency_factor, mismatched_breakdown, unit_price, CategoryRules};
use crate::config::RoomMinimumPolicy;
use shared::{
    CategoryDetails, ConfigurationField, CookingDetails, MealDelivery, PriceBreakdown,
    ServiceCatalogEntry, ServiceCategory, SubscriptionServiceConfiguration, ValidationError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CookingRules;

/// Drop empty delivery rows and keep only the first row for each day
pub fn normalize_deliveries(deliveries: &[MealDelivery]) -> Vec<MealDelivery> {
    let mut normalized: Vec<MealDelivery> = Vec::with_capacity(deliveries.len());
    for delivery in deliveries.iter().filter(|delivery| delivery.count > 0) {
        if !normalized.iter().any(|existing| existing.day == delivery.day) {
            normalized.push(*delivery);
        }
    }
    normalized
}

impl CategoryRules for CookingRules {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Cooking
    }

    fn default_details(&self, _room_policy: RoomMinimumPolicy) -> CategoryDetails {
        CategoryDetails::Cooking(CookingDetails {
            meal_type: None,
            meals_per_delivery: Vec::new(),
        })
    }

    fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown {
        let CategoryDetails::Cooking(details) = &configuration.service_details.details else {
            return mismatched_breakdown(self.category());
        };

        let factors = vec![
            factor("Meals", f64::from(details.total_meals())),
            frequency_factor(configuration.frequency),
        ];

        breakdown(self.category(), unit_price(configuration, entry), factors)
    }

    fn validate_details(&self, details: &CategoryDetails, errors: &mut Vec<ValidationError>) {
        let CategoryDetails::Cooking(details) = details else {
            return;
        };

        let has_meal_type = details
            .meal_type
            .as_deref()
            .is_some_and(|meal_type| !meal_type.trim().is_empty());
        if !has_meal_type {
            errors.push(ValidationError::new(
                ConfigurationField::MealType,
                "Please select a meal type",
            ));
        }

        if details.meals_per_delivery.is_empty() {
            errors.push(ValidationError::new(
                ConfigurationField::MealsPerDelivery,
                "Please add at least one delivery day",
            ));
        } else if details.total_meals() == 0 {
            errors.push(ValidationError::new(
                ConfigurationField::MealsPerDelivery,
                "Please order at least one meal",
            ));
        }
    }
}

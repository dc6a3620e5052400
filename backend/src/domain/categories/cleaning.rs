//! Cleaning: priced per room from the selected option's room price table,
//! scaled by cleaning type, property type, scheduled days and frequency.

use super::{breakdown, factor, frequency_factor, mismatched_breakdown, scheduled_days_factor, CategoryRules};
use crate::config::RoomMinimumPolicy;
use shared::{
    CategoryDetails, CleaningDetails, CleaningType, ConfigurationField, HouseType, PriceBreakdown,
    RoomKind, ServiceCatalogEntry, ServiceCategory, SubscriptionServiceConfiguration,
    ValidationError,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct CleaningRules;

pub fn cleaning_type_multiplier(cleaning_type: Option<CleaningType>) -> f64 {
    match cleaning_type {
        Some(CleaningType::StandardCleaning) | None => 1.0,
        Some(CleaningType::DeepCleaning) => 2.5,
        Some(CleaningType::MoveInMoveOut) => 2.5,
        Some(CleaningType::PostConstruction) => 4.0,
    }
}

pub fn property_multiplier(house_type: Option<HouseType>) -> f64 {
    match house_type {
        Some(HouseType::Duplex) => 1.5,
        Some(HouseType::Flat) | None => 1.0,
    }
}

/// Sum of room price times room count. Rooms missing from the price table cost 0.
pub fn room_total(rooms: &BTreeMap<RoomKind, u32>, room_prices: &BTreeMap<RoomKind, f64>) -> f64 {
    rooms
        .iter()
        .map(|(room, count)| room_prices.get(room).copied().unwrap_or(0.0) * f64::from(*count))
        .sum()
}

impl CategoryRules for CleaningRules {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Cleaning
    }

    fn default_details(&self, room_policy: RoomMinimumPolicy) -> CategoryDetails {
        let rooms = RoomKind::ALL
            .iter()
            .map(|room| (*room, room_policy.minimum_for(*room)))
            .collect();

        CategoryDetails::Cleaning(CleaningDetails {
            cleaning_type: Some(CleaningType::StandardCleaning),
            house_type: Some(HouseType::Flat),
            rooms,
        })
    }

    fn price_breakdown(
        &self,
        configuration: &SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> PriceBreakdown {
        let CategoryDetails::Cleaning(details) = &configuration.service_details.details else {
            return mismatched_breakdown(self.category());
        };

        let empty = BTreeMap::new();
        let room_prices = configuration
            .service_details
            .service_option
            .as_deref()
            .and_then(|option_id| entry.find_option(option_id))
            .map(|option| &option.room_prices)
            .unwrap_or(&empty);

        let factors = vec![
            factor("Cleaning type", cleaning_type_multiplier(details.cleaning_type)),
            factor("Property type", property_multiplier(details.house_type)),
            scheduled_days_factor(configuration),
            frequency_factor(configuration.frequency),
        ];

        breakdown(self.category(), room_total(&details.rooms, room_prices), factors)
    }

    fn validate_details(&self, details: &CategoryDetails, errors: &mut Vec<ValidationError>) {
        let CategoryDetails::Cleaning(details) = details else {
            return;
        };

        if details.house_type.is_none() {
            errors.push(ValidationError::new(
                ConfigurationField::HouseType,
                "Please select a property type",
            ));
        }
        if details.cleaning_type.is_none() {
            errors.push(ValidationError::new(
                ConfigurationField::CleaningType,
                "Please select a cleaning type",
            ));
        }
        if details.total_rooms() == 0 {
            errors.push(ValidationError::new(
                ConfigurationField::Rooms,
                "Please select at least one room to clean",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use shared::{DayOfWeek, Frequency, ServiceOption};

    fn standard_option() -> ServiceOption {
        let mut option = option("standard", 0.0);
        option.room_prices.insert(RoomKind::Kitchen, 1000.0);
        option.room_prices.insert(RoomKind::Bedroom, 1500.0);
        option
    }

    fn details(house_type: HouseType, rooms: &[(RoomKind, u32)]) -> CategoryDetails {
        CategoryDetails::Cleaning(CleaningDetails {
            cleaning_type: Some(CleaningType::StandardCleaning),
            house_type: Some(house_type),
            rooms: rooms.iter().copied().collect(),
        })
    }

    #[test]
    fn test_weekly_flat_two_days() {
        let entry = entry(ServiceCategory::Cleaning, vec![standard_option()]);
        let configuration = configuration(
            &entry,
            Frequency::Weekly,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday],
            Some("standard"),
            details(HouseType::Flat, &[(RoomKind::Bedroom, 1), (RoomKind::Kitchen, 1)]),
        );

        let result = CleaningRules.price_breakdown(&configuration, &entry);

        assert_eq!(result.base_amount, 2500.0);
        assert_eq!(result.total, 20000.0);
    }

    #[test]
    fn test_duplex_multiplier() {
        let entry = entry(ServiceCategory::Cleaning, vec![standard_option()]);
        let configuration = configuration(
            &entry,
            Frequency::Weekly,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday],
            Some("standard"),
            details(HouseType::Duplex, &[(RoomKind::Bedroom, 1), (RoomKind::Kitchen, 1)]),
        );

        assert_eq!(CleaningRules.price_breakdown(&configuration, &entry).total, 30000.0);
    }

    #[test]
    fn test_cleaning_type_multipliers() {
        assert_eq!(cleaning_type_multiplier(Some(CleaningType::StandardCleaning)), 1.0);
        assert_eq!(cleaning_type_multiplier(Some(CleaningType::DeepCleaning)), 2.5);
        assert_eq!(cleaning_type_multiplier(Some(CleaningType::MoveInMoveOut)), 2.5);
        assert_eq!(cleaning_type_multiplier(Some(CleaningType::PostConstruction)), 4.0);
    }

    #[test]
    fn test_unpriced_rooms_cost_nothing() {
        let rooms = [(RoomKind::Balcony, 2), (RoomKind::Bedroom, 2)].into_iter().collect();
        assert_eq!(room_total(&rooms, &standard_option().room_prices), 3000.0);
    }

    #[test]
    fn test_no_days_or_rooms_prices_zero() {
        let entry = entry(ServiceCategory::Cleaning, vec![standard_option()]);

        let no_days = configuration(
            &entry,
            Frequency::Weekly,
            vec![],
            Some("standard"),
            details(HouseType::Flat, &[(RoomKind::Bedroom, 3)]),
        );
        assert_eq!(CleaningRules.price_breakdown(&no_days, &entry).total, 0.0);

        let no_rooms = configuration(
            &entry,
            Frequency::Weekly,
            vec![DayOfWeek::Friday],
            Some("standard"),
            details(HouseType::Flat, &[]),
        );
        assert_eq!(CleaningRules.price_breakdown(&no_rooms, &entry).total, 0.0);
    }

    #[test]
    fn test_default_details_follow_room_policy() {
        let CategoryDetails::Cleaning(strict) =
            CleaningRules.default_details(RoomMinimumPolicy::RequiredRoomsAtLeastOne)
        else {
            panic!("Expected cleaning details");
        };
        assert_eq!(strict.rooms[&RoomKind::Bedroom], 1);
        assert_eq!(strict.rooms[&RoomKind::Staircase], 0);
        assert_eq!(strict.total_rooms(), 4);

        let CategoryDetails::Cleaning(relaxed) = CleaningRules.default_details(RoomMinimumPolicy::AllowZero) else {
            panic!("Expected cleaning details");
        };
        assert_eq!(relaxed.total_rooms(), 0);
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut errors = Vec::new();
        let details = CategoryDetails::Cleaning(CleaningDetails {
            cleaning_type: None,
            house_type: None,
            rooms: [(RoomKind::Bedroom, 0), (RoomKind::Kitchen, 0)].into_iter().collect(),
        });

        CleaningRules.validate_details(&details, &mut errors);

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ConfigurationField::HouseType, ConfigurationField::CleaningType, ConfigurationField::Rooms]
        );
    }
}

//! Configuration lifecycle: defaults, restore and the patch reducer.
//!
//! `derive_configuration` is the only way a configuration changes. Each call
//! applies one patch to a copy of the previous configuration, then re-applies
//! the schedule rules (unique days, single-day truncation) and the detail
//! rules (room minimums, one meal row per day, bag range) before the price is
//! recomputed. Restoring a saved configuration runs the same normalization.

use log::{debug, info};

use crate::config::RoomMinimumPolicy;
use crate::domain::categories::cooking::normalize_deliveries;
use crate::domain::categories::laundry::clamp_bags;
use crate::domain::categories::rules_for;
use crate::domain::commands::configuration::{
    DeriveConfigurationCommand, DeriveConfigurationResult, OpenConfigurationCommand,
};
use crate::domain::models::configuration::{
    cleaning_details_mut, cooking_details_mut, laundry_details_mut, pest_control_details_mut,
    ConfigurationError,
};
use crate::domain::schedule_policy::{dedupe_days, restricts_to_single_day, toggle_day, truncate_for_frequency};
use crate::domain::{PricingService, ValidationService};
use shared::{
    CategoryDetails, ConfigurationPatch, MealDelivery, RoomKind, ServiceCatalogEntry, ServiceDetails,
    SubscriptionServiceConfiguration,
};

#[derive(Debug, Clone)]
pub struct ConfigurationService {
    pricing_service: PricingService,
    validation_service: ValidationService,
    room_policy: RoomMinimumPolicy,
}

impl ConfigurationService {
    pub fn new(pricing_service: PricingService, room_policy: RoomMinimumPolicy) -> Self {
        Self {
            pricing_service,
            validation_service: ValidationService::new(),
            room_policy,
        }
    }

    pub fn room_policy(&self) -> RoomMinimumPolicy {
        self.room_policy
    }

    /// A new configuration with the category's defaults
    pub fn default_configuration(&self, entry: &ServiceCatalogEntry) -> SubscriptionServiceConfiguration {
        let rules = rules_for(entry.category);

        let mut configuration = SubscriptionServiceConfiguration {
            service_id: entry.id.clone(),
            category: entry.category,
            frequency: Some(rules.default_frequency()),
            scheduled_days: Vec::new(),
            preferred_time_slot: None,
            service_details: ServiceDetails {
                service_option: None,
                details: rules.default_details(self.room_policy),
            },
            price: 0.0,
        };
        configuration.price = self.pricing_service.calculate_price(&configuration, entry);
        configuration
    }

    /// Normalize a configuration handed back by the caller so editing resumes
    /// from a consistent state
    pub fn restore_configuration(
        &self,
        existing: SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> SubscriptionServiceConfiguration {
        self.finalize(existing, entry)
    }

    /// Defaults for a fresh wizard, or the restored configuration when resuming
    pub fn open(&self, command: OpenConfigurationCommand) -> SubscriptionServiceConfiguration {
        match command.existing_configuration {
            Some(existing) => {
                info!("Restoring configuration for service {}", command.service.id);
                self.restore_configuration(existing, &command.service)
            }
            None => {
                info!("Creating default configuration for service {}", command.service.id);
                self.default_configuration(&command.service)
            }
        }
    }

    /// Apply one patch and return the next configuration
    pub fn derive_configuration(
        &self,
        previous: &SubscriptionServiceConfiguration,
        patch: ConfigurationPatch,
        entry: &ServiceCatalogEntry,
    ) -> Result<SubscriptionServiceConfiguration, ConfigurationError> {
        debug!("Applying patch to {}: {:?}", previous.service_id, patch);

        let mut next = previous.clone();

        match patch {
            ConfigurationPatch::SetFrequency { frequency } => {
                next.frequency = Some(frequency);
            }
            ConfigurationPatch::ToggleDay { day } => {
                next.scheduled_days = toggle_day(&next.scheduled_days, day, next.frequency, next.category);
            }
            ConfigurationPatch::SetScheduledDays { days } => {
                let days = dedupe_days(&days);
                if days.len() > 1 && restricts_to_single_day(next.frequency, next.category) {
                    return Err(ConfigurationError::TooManyDays { count: days.len() });
                }
                next.scheduled_days = days;
            }
            ConfigurationPatch::SetTimeSlot { slot } => {
                next.preferred_time_slot = Some(slot);
            }
            ConfigurationPatch::SelectServiceOption { option_id } => {
                if entry.find_option(&option_id).is_none() {
                    return Err(ConfigurationError::UnknownServiceOption(option_id));
                }
                next.service_details.service_option = Some(option_id);
            }
            ConfigurationPatch::SetCleaningType { cleaning_type } => {
                cleaning_details_mut(&mut next)?.cleaning_type = Some(cleaning_type);
            }
            ConfigurationPatch::SetHouseType { house_type } => {
                cleaning_details_mut(&mut next)?.house_type = Some(house_type);
            }
            ConfigurationPatch::SetRoomCount { room, count } => {
                let minimum = self.room_policy.minimum_for(room);
                cleaning_details_mut(&mut next)?.rooms.insert(room, count.max(minimum));
            }
            ConfigurationPatch::SetMealType { meal_type } => {
                cooking_details_mut(&mut next)?.meal_type = Some(meal_type);
            }
            ConfigurationPatch::SetMealsForDay { day, count } => {
                let deliveries = &mut cooking_details_mut(&mut next)?.meals_per_delivery;
                match deliveries.iter().position(|delivery| delivery.day == day) {
                    Some(index) if count == 0 => {
                        deliveries.remove(index);
                    }
                    Some(index) => deliveries[index].count = count,
                    None if count > 0 => deliveries.push(MealDelivery { day, count }),
                    None => {}
                }
            }
            ConfigurationPatch::SetLaundryType { laundry_type } => {
                laundry_details_mut(&mut next)?.laundry_type = Some(laundry_type);
            }
            ConfigurationPatch::SetBags { bags } => {
                laundry_details_mut(&mut next)?.bags = clamp_bags(bags);
            }
            ConfigurationPatch::SetTreatmentType { treatment_type } => {
                pest_control_details_mut(&mut next)?.treatment_type = Some(treatment_type);
            }
            ConfigurationPatch::SetSeverity { severity } => {
                pest_control_details_mut(&mut next)?.severity = severity;
            }
            ConfigurationPatch::ToggleArea { area } => {
                let areas = &mut pest_control_details_mut(&mut next)?.areas;
                if !areas.remove(&area) {
                    areas.insert(area);
                }
            }
        }

        Ok(self.finalize(next, entry))
    }

    /// Apply a patch and validate the result
    pub fn derive(&self, command: DeriveConfigurationCommand) -> Result<DeriveConfigurationResult, ConfigurationError> {
        let configuration = self.derive_configuration(&command.configuration, command.patch, &command.service)?;
        let validation = self.validation_service.validate(&configuration, &command.service);

        Ok(DeriveConfigurationResult {
            configuration,
            validation,
        })
    }

    /// Re-apply the schedule and detail invariants, then recompute the price
    fn finalize(
        &self,
        mut configuration: SubscriptionServiceConfiguration,
        entry: &ServiceCatalogEntry,
    ) -> SubscriptionServiceConfiguration {
        let days = dedupe_days(&configuration.scheduled_days);
        configuration.scheduled_days =
            truncate_for_frequency(&days, configuration.frequency, configuration.category);

        match &mut configuration.service_details.details {
            CategoryDetails::Cleaning(details) => {
                for room in RoomKind::ALL {
                    let minimum = self.room_policy.minimum_for(room);
                    let count = details.rooms.entry(room).or_insert(0);
                    *count = (*count).max(minimum);
                }
            }
            CategoryDetails::Cooking(details) => {
                details.meals_per_delivery = normalize_deliveries(&details.meals_per_delivery);
            }
            CategoryDetails::Laundry(details) => details.bags = clamp_bags(details.bags),
            CategoryDetails::PestControl(_) => {}
        }

        configuration.price = self.pricing_service.calculate_price(&configuration, entry);
        configuration
    }
}

impl Default for ConfigurationService {
    fn default() -> Self {
        Self::new(PricingService::new(), RoomMinimumPolicy::default())
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Service category a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceCategory {
    Cleaning,
    Cooking,
    Laundry,
    PestControl,
}

impl ServiceCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceCategory::Cleaning => "Cleaning",
            ServiceCategory::Cooking => "Cooking",
            ServiceCategory::Laundry => "Laundry",
            ServiceCategory::PestControl => "Pest Control",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recurrence cadence of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Weekly => write!(f, "Weekly"),
            Frequency::BiWeekly => write!(f, "Bi-weekly"),
            Frequency::Monthly => write!(f, "Monthly"),
        }
    }
}

/// Weekday tag used for scheduled days and meal deliveries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Get the display name for the day
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseType {
    Flat,
    Duplex,
}

/// Cleaning plan; drives the option multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CleaningType {
    StandardCleaning,
    DeepCleaning,
    MoveInMoveOut,
    PostConstruction,
}

/// Room kinds that can be counted for a cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Kitchen,
    LivingRoom,
    Balcony,
    Staircase,
}

impl RoomKind {
    pub const ALL: [RoomKind; 6] = [
        RoomKind::Bedroom,
        RoomKind::Bathroom,
        RoomKind::Kitchen,
        RoomKind::LivingRoom,
        RoomKind::Balcony,
        RoomKind::Staircase,
    ];

    /// Rooms every home is assumed to have; balcony and staircase are optional
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            RoomKind::Bedroom | RoomKind::Bathroom | RoomKind::Kitchen | RoomKind::LivingRoom
        )
    }
}

/// Pest-control infestation intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

/// Property areas a pest-control treatment can cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyArea {
    Kitchen,
    Bedrooms,
    Bathrooms,
    LivingAreas,
    Storage,
    Outdoor,
}

/// A selectable sub-plan of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: String,
    pub label: String,
    pub price: f64,
    /// Per-room prices, only meaningful for cleaning options
    #[serde(default)]
    pub room_prices: BTreeMap<RoomKind, f64>,
}

/// A purchasable service definition. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCatalogEntry {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    /// Base price used when no option is selected
    pub price: f64,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
}

impl ServiceCatalogEntry {
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Look up an option by id
    pub fn find_option(&self, option_id: &str) -> Option<&ServiceOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningDetails {
    pub cleaning_type: Option<CleaningType>,
    pub house_type: Option<HouseType>,
    #[serde(default)]
    pub rooms: BTreeMap<RoomKind, u32>,
}

impl CleaningDetails {
    pub fn total_rooms(&self) -> u32 {
        self.rooms.values().sum()
    }
}

/// Number of meals delivered on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDelivery {
    pub day: DayOfWeek,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingDetails {
    pub meal_type: Option<String>,
    #[serde(default)]
    pub meals_per_delivery: Vec<MealDelivery>,
}

impl CookingDetails {
    pub fn total_meals(&self) -> u32 {
        self.meals_per_delivery.iter().map(|delivery| delivery.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaundryDetails {
    pub laundry_type: Option<String>,
    /// Bags per pickup, 1-10
    pub bags: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestControlDetails {
    pub treatment_type: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub areas: BTreeSet<PropertyArea>,
}

/// Category-specific detail block, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CategoryDetails {
    Cleaning(CleaningDetails),
    Cooking(CookingDetails),
    Laundry(LaundryDetails),
    PestControl(PestControlDetails),
}

impl CategoryDetails {
    pub fn category(&self) -> ServiceCategory {
        match self {
            CategoryDetails::Cleaning(_) => ServiceCategory::Cleaning,
            CategoryDetails::Cooking(_) => ServiceCategory::Cooking,
            CategoryDetails::Laundry(_) => ServiceCategory::Laundry,
            CategoryDetails::PestControl(_) => ServiceCategory::PestControl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    /// Selected option id; required whenever the catalog entry exposes options
    pub service_option: Option<String>,
    #[serde(flatten)]
    pub details: CategoryDetails,
}

/// The configuration a wizard builds up and finally submits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionServiceConfiguration {
    pub service_id: String,
    /// Denormalized copy of the catalog entry's category
    pub category: ServiceCategory,
    pub frequency: Option<Frequency>,
    /// Unique by weekday, in insertion order
    #[serde(default)]
    pub scheduled_days: Vec<DayOfWeek>,
    pub preferred_time_slot: Option<TimeSlot>,
    pub service_details: ServiceDetails,
    /// Derived; recomputed on every change
    #[serde(default)]
    pub price: f64,
}

/// Configuration fields validation errors can refer to.
/// Serialized with the configuration's own JSON key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigurationField {
    ServiceId,
    Frequency,
    ScheduledDays,
    PreferredTimeSlot,
    ServiceDetails,
    HouseType,
    CleaningType,
    Rooms,
    MealType,
    MealsPerDelivery,
    ServiceOption,
}

impl ConfigurationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationField::ServiceId => "serviceId",
            ConfigurationField::Frequency => "frequency",
            ConfigurationField::ScheduledDays => "scheduledDays",
            ConfigurationField::PreferredTimeSlot => "preferredTimeSlot",
            ConfigurationField::ServiceDetails => "serviceDetails",
            ConfigurationField::HouseType => "houseType",
            ConfigurationField::CleaningType => "cleaningType",
            ConfigurationField::Rooms => "rooms",
            ConfigurationField::MealType => "mealType",
            ConfigurationField::MealsPerDelivery => "mealsPerDelivery",
            ConfigurationField::ServiceOption => "serviceOption",
        }
    }
}

impl fmt::Display for ConfigurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: ConfigurationField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: ConfigurationField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation outcome for a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error_on(&self, field: ConfigurationField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// Steps of the configuration wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WizardStep {
    Package,
    PropertyOrDetails,
    Schedule,
    Review,
}

impl WizardStep {
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Package => 0,
            WizardStep::PropertyOrDetails => 1,
            WizardStep::Schedule => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Package => Some(WizardStep::PropertyOrDetails),
            WizardStep::PropertyOrDetails => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Package => None,
            WizardStep::PropertyOrDetails => Some(WizardStep::Package),
            WizardStep::Schedule => Some(WizardStep::PropertyOrDetails),
            WizardStep::Review => Some(WizardStep::Schedule),
        }
    }
}

/// A single change applied to a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConfigurationPatch {
    SetFrequency { frequency: Frequency },
    ToggleDay { day: DayOfWeek },
    SetScheduledDays { days: Vec<DayOfWeek> },
    SetTimeSlot { slot: TimeSlot },
    SelectServiceOption { option_id: String },
    SetCleaningType { cleaning_type: CleaningType },
    SetHouseType { house_type: HouseType },
    SetRoomCount { room: RoomKind, count: u32 },
    SetMealType { meal_type: String },
    SetMealsForDay { day: DayOfWeek, count: u32 },
    SetLaundryType { laundry_type: String },
    SetBags { bags: u32 },
    SetTreatmentType { treatment_type: String },
    SetSeverity { severity: Severity },
    ToggleArea { area: PropertyArea },
}

/// One multiplicative step of a price calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFactor {
    pub label: String,
    pub value: f64,
}

/// Itemised price calculation for display on the review step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub category: ServiceCategory,
    /// Room total for cleaning, unit price otherwise
    pub base_amount: f64,
    pub factors: Vec<PriceFactor>,
    pub total: f64,
}

/// Request for a fresh or restored configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfigurationRequest {
    pub service: ServiceCatalogEntry,
    pub existing_configuration: Option<SubscriptionServiceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveConfigurationRequest {
    pub service: ServiceCatalogEntry,
    pub configuration: SubscriptionServiceConfiguration,
    pub patch: ConfigurationPatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveConfigurationResponse {
    pub configuration: SubscriptionServiceConfiguration,
    pub validation: ValidationResult,
}

/// Request carrying a configuration and the entry it was built for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub service: ServiceCatalogEntry,
    pub configuration: SubscriptionServiceConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteResponse {
    pub price: f64,
    pub formatted_price: String,
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStepRequest {
    pub service: ServiceCatalogEntry,
    pub configuration: SubscriptionServiceConfiguration,
    pub step: WizardStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStepResponse {
    pub step: WizardStep,
    pub can_advance: bool,
    pub errors: Vec<ValidationError>,
    pub next_step: Option<WizardStep>,
}

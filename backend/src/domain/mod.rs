//! # Domain Module
//!
//! Contains all business logic for configuring home-service subscriptions.
//!
//! The domain layer is pure: it performs no I/O and holds no state between
//! calls. Every operation takes a configuration and the catalog entry it
//! was built for and returns a new value.
//!
//! ## Module Organization
//!
//! - **schedule_policy**: The single-day rule for monthly and pest-control schedules
//! - **categories**: Per-category pricing, validation and defaults
//! - **pricing_service**: Live price and price breakdown of a configuration
//! - **validation_service**: Field-level validation of a configuration
//! - **configuration_service**: Defaults, restore and the patch reducer
//! - **wizard**: Four-step wizard sequencer built on the validator
//! - **commands**: Command and result types consumed by the services
//!
//! ## Business Rules
//!
//! - A monthly or pest-control schedule holds at most one day
//! - Pest control is billed monthly
//! - A cleaning needs at least one room
//! - Meal rows with a zero count are dropped
//! - Laundry bags stay within 1-10
//! - Price is derived, never taken from input

pub mod categories;
pub mod commands;
pub mod configuration_service;
pub mod models;
pub mod pricing_service;
pub mod schedule_policy;
pub mod validation_service;
pub mod wizard;

pub use configuration_service::*;
pub use pricing_service::*;
pub use validation_service::*;
pub use wizard::*;

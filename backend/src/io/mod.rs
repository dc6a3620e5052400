//! # IO Module
//!
//! Interface layer between the booking UI and the domain logic.
//!
//! Translates HTTP requests into domain commands and domain results into
//! JSON responses. Validation findings travel in normal `200` responses;
//! only rejected patches and malformed requests produce error statuses.
//!
//! ## Supported Operations
//!
//! - **POST /api/configurations/default**: Fresh or restored configuration
//! - **POST /api/configurations/derive**: Apply one patch
//! - **POST /api/configurations/validate**: Validate a configuration
//! - **POST /api/pricing/quote**: Price with breakdown
//! - **POST /api/wizard/step**: Check whether a wizard step is complete

pub mod rest;

pub use rest::*;

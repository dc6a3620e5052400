//! Domain-only types layered over the shared configuration model.

pub mod configuration;

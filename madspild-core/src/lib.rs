//! Core types and service wiring for the madspild food-waste clearance browser.

/// Domain models for brands, stores, and clearance listings.
pub mod model;
/// Bundle of ports making up a single upstream provider.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;

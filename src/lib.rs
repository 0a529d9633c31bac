pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod registry;
pub mod services;

// Convenient re-exports (so call sites can do `lootworth::Registry`, etc.)
pub use error::{AppResult, DomainError};
pub use registry::Registry;
pub use services::{PricingService, SettlementService};

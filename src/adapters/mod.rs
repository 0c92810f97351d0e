// Adapters layer: concrete implementations for external systems.

pub mod dashboard;

pub use dashboard::{MerakiClient, DEFAULT_BASE_URL};

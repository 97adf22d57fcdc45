//! Infrastructure layer for venue-provision
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the platform HTTP client, the in-memory
//! store used for dry runs, configuration file loading and the audit log.

pub mod api;
pub mod config;
pub mod logging;
pub mod memory;

// Re-export commonly used types
pub use api::{ApiClient, ApiClientConfig};
pub use config::{
    ConfigError, ConfigLoader, FileApiConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileProvisionConfig, FileVenueConfig,
};
pub use logging::JsonlProvisionLogger;
pub use memory::InMemoryStore;

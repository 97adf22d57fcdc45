//! Configuration file loading for venue-provision
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VENUE_PROVISION_API_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./venue-provision.toml` or `./.venue-provision.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/venue-provision/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileApiConfig, FileConfig, FileOutputConfig, FileOutputFormat, FileProvisionConfig,
    FileVenueConfig,
};
pub use loader::{API_ENV_PREFIX, ConfigLoader};

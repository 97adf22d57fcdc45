//! Application layer for venue-provision
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProvisionParams;
pub use ports::{
    group_store::{GroupQuery, GroupStore, StoreError},
    profile_store::ProfileStore,
    progress::{NoProgress, ProvisionProgressNotifier, ProvisionStep},
    provision_logger::{NoProvisionLogger, ProvisionEvent, ProvisionLogger},
};
pub use use_cases::ensure_profile::{EnsureProfileError, EnsureProfileInput, EnsureProfileUseCase};
pub use use_cases::provision_groups::{
    BatchReport, GroupProvisioner, GroupSummary, PaperFailure, ProvisionError,
    ProvisionVenueInput, ProvisionVenueOutput, Provisioned, VenueGroupOutput,
};

//! Application-level configuration.
//!
//! - [`ProvisionParams`] - worker pool size and overwrite behaviour

pub mod provision_params;

pub use provision_params::ProvisionParams;

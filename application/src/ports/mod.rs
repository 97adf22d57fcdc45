//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod group_store;
pub mod profile_store;
pub mod progress;
pub mod provision_logger;

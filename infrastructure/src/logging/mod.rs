//! Logging infrastructure: structured provisioning audit log.
//!
//! Provides [`JsonlProvisionLogger`], a JSONL file writer that implements
//! the [`ProvisionLogger`](venue_application::ProvisionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlProvisionLogger;

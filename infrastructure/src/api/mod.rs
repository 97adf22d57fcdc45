//! Platform REST API adapter.

mod client;
pub mod error;

pub use client::{ApiClient, ApiClientConfig};

//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`constants`] - well-known identities of the remote platform

pub mod constants;
pub mod error;

//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ensure_profile;
pub mod provision_groups;
#[cfg(test)]
pub(crate) mod test_support;

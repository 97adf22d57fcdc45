//! Groups of the remote store and their hierarchical identifiers.

pub mod entities;
pub mod group_id;

pub use entities::{Group, GroupDetails, GroupEdit};

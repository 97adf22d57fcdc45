//! Group store port
//!
//! Defines the interface to the remote platform's group resources.

use async_trait::async_trait;
use thiserror::Error;
use venue_domain::{Group, GroupEdit};

/// Errors reported by the remote store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {field} {value}")]
    AlreadyExists { field: String, value: String },

    #[error("Remote error {name} (status {status}): {message}")]
    Remote {
        name: String,
        message: String,
        status: u16,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl StoreError {
    /// The distinguished signal that a lookup found nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Bulk group selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupQuery {
    /// Every group whose id starts with the prefix
    Prefix(String),
    /// Groups exactly one path segment below the parent id
    Children(String),
}

impl std::fmt::Display for GroupQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupQuery::Prefix(prefix) => write!(f, "prefix {}", prefix),
            GroupQuery::Children(parent) => write!(f, "children of {}", parent),
        }
    }
}

/// Remote group resources
///
/// Implementations (adapters) live in the infrastructure layer. The store
/// is the only source of truth; callers never cache across calls.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Look up a group by id, `None` when absent
    async fn get_group(&self, id: &str) -> Result<Option<Group>, StoreError>;

    /// Create or update a group through a signed edit
    async fn post_group_edit(&self, edit: GroupEdit) -> Result<(), StoreError>;

    /// List groups matching a bulk query
    async fn list_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, StoreError>;

    /// Add members to an existing group
    async fn add_members(&self, group_id: &str, members: &[String]) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::NotFound("org".to_string()).is_not_found());
        assert!(
            !StoreError::Remote {
                name: "ForbiddenError".to_string(),
                message: "no".to_string(),
                status: 403,
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_query_display() {
        assert_eq!(
            GroupQuery::Children("org".to_string()).to_string(),
            "children of org"
        );
    }
}

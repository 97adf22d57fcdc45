//! Profile store port

use super::group_store::StoreError;
use async_trait::async_trait;
use venue_domain::{Group, Profile};

/// Remote profile resources
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up a profile by email or tilde id, `None` when absent
    async fn get_profile(&self, email_or_id: &str) -> Result<Option<Profile>, StoreError>;

    /// Next free tilde username for a name
    async fn tilde_username(
        &self,
        first: &str,
        last: &str,
        middle: Option<&str>,
    ) -> Result<String, StoreError>;

    /// Post a group outside any venue namespace
    async fn post_group(&self, group: Group) -> Result<(), StoreError>;

    /// Create a profile
    async fn post_profile(&self, profile: Profile) -> Result<Profile, StoreError>;
}

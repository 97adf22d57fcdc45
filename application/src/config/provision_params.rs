//! Provisioning parameters: use case control.
//!
//! [`ProvisionParams`] groups the static parameters that control how
//! [`GroupProvisioner`](crate::use_cases::provision_groups::GroupProvisioner)
//! talks to the remote store.

use serde::{Deserialize, Serialize};

/// Provisioning control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionParams {
    /// Maximum number of submissions whose groups are created concurrently.
    pub max_concurrency: usize,
    /// Re-post paper committee groups that already exist.
    pub overwrite: bool,
}

impl Default for ProvisionParams {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
            overwrite: false,
        }
    }
}

impl ProvisionParams {
    // ==================== Builder Methods ====================

    /// Set the worker pool size; zero is raised to one.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

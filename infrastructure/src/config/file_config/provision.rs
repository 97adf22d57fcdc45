//! Provisioning configuration from TOML (`[provision]` section)

use serde::{Deserialize, Serialize};
use venue_application::ProvisionParams;

/// Worker pool and overwrite settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvisionConfig {
    /// Submissions processed concurrently (default: 10).
    pub max_concurrency: usize,
    /// Re-post existing paper committee groups (default: false).
    pub overwrite: bool,
}

impl Default for FileProvisionConfig {
    fn default() -> Self {
        let params = ProvisionParams::default();
        Self {
            max_concurrency: params.max_concurrency,
            overwrite: params.overwrite,
        }
    }
}

impl FileProvisionConfig {
    pub fn to_params(&self) -> ProvisionParams {
        ProvisionParams::default()
            .with_max_concurrency(self.max_concurrency)
            .with_overwrite(self.overwrite)
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod provision;
mod venue;

pub use api::FileApiConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provision::FileProvisionConfig;
pub use venue::FileVenueConfig;

use serde::{Deserialize, Serialize};
use venue_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Platform API connection
    pub api: FileApiConfig,
    /// Worker pool and overwrite behaviour
    pub provision: FileProvisionConfig,
    /// The venue being provisioned
    pub venue: FileVenueConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. API connection values
    /// 2. Worker pool size
    /// 3. The venue definition (id, role names, identity-reader policies)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. API
        if self.api.base_url.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingValue {
                    field: "api.base_url".to_string(),
                },
                message: "api.base_url is empty".to_string(),
            });
        }
        if self.api.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "api.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "api.timeout_seconds cannot be 0".to_string(),
            });
        }

        // 2. Worker pool
        if self.provision.max_concurrency == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidValue {
                    field: "provision.max_concurrency".to_string(),
                    value: "0".to_string(),
                },
                message: "provision.max_concurrency: 0 is raised to 1".to_string(),
            });
        }

        // 3. Venue
        issues.extend(self.venue.validate());

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venue_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://api.example.org"
timeout_seconds = 30

[provision]
max_concurrency = 4
overwrite = true

[venue]
id = "org/Venue/2024"
use_senior_action_editors = true

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.org");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.provision.to_params().max_concurrency, 4);
        assert!(config.provision.overwrite);
        assert!(config.venue.use_senior_action_editors);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.provision.max_concurrency, 10);
        assert!(!config.provision.overwrite);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_requires_venue_id() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[api]
timeout_seconds = 0

[provision]
max_concurrency = 0

[venue]
id = "org/Venue"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
        // Zero is clamped rather than rejected
        assert_eq!(config.provision.to_params().max_concurrency, 1);
    }
}

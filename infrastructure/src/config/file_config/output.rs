//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use venue_domain::OutputFormat;

// Re-export OutputFormat from domain for convenience
pub use venue_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Configured format, text when unset
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format(), OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_unset_format_is_text() {
        assert_eq!(FileOutputConfig::default().format(), OutputFormat::Text);
    }
}

//! Structured configuration issues.
//!
//! Configuration sources report every problem they find at once instead of
//! failing on the first one; callers decide what to do by severity.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: provisioning cannot run with this configuration.
    Error,
    /// Non-fatal: provisioning runs but may not do what was intended.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required value is missing or blank.
    MissingValue { field: String },
    /// A value is present but outside its valid range.
    InvalidValue { field: String, value: String },
    /// An identity-reader policy names a role the venue does not use.
    UnusedIdentityReader { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Dotted path of the offending configuration key, e.g. `venue.id`
    pub fn field(&self) -> &str {
        match &self.code {
            ConfigIssueCode::MissingValue { field }
            | ConfigIssueCode::InvalidValue { field, .. }
            | ConfigIssueCode::UnusedIdentityReader { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_of_every_code() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::UnusedIdentityReader {
                field: "venue.reviewer_identity_readers".to_string(),
                value: "area_chairs".to_string(),
            },
            message: String::new(),
        };
        assert_eq!(issue.field(), "venue.reviewer_identity_readers");
        assert!(!issue.is_error());

        let issue = ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::MissingValue {
                field: "venue.id".to_string(),
            },
            message: String::new(),
        };
        assert_eq!(issue.field(), "venue.id");
        assert!(issue.is_error());
    }
}

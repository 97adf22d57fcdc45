//! Venue definition from TOML (`[venue]` section)
//!
//! ```toml
//! [venue]
//! id = "org/Venue/2024/Track"
//! name = "Venue 2024 Track"
//! use_action_editors = true
//! reviewer_identity_readers = ["program_chairs", "area_chairs_assigned"]
//!
//! [venue.roles]
//! action_editors = "Area_Chairs"
//!
//! [venue.review_stage]
//! name = "Official_Review"
//! ```

use serde::{Deserialize, Serialize};
use venue_domain::{
    BidStage, ConfigIssue, ConfigIssueCode, DecisionStage, DomainError, IdentityReaders,
    MetaReviewStage, ReviewStage, RoleNames, Severity, SubmissionStage, Venue,
};

/// Raw venue configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVenueConfig {
    /// Venue id, a slash-delimited path
    pub id: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub use_action_editors: bool,
    pub use_senior_action_editors: bool,
    pub roles: RoleNames,
    pub submission_stage: SubmissionStage,
    pub review_stage: Option<ReviewStage>,
    pub meta_review_stage: Option<MetaReviewStage>,
    pub decision_stage: Option<DecisionStage>,
    pub bid_stages: Vec<BidStage>,
    pub reviewer_identity_readers: Vec<IdentityReaders>,
    pub action_editor_identity_readers: Vec<IdentityReaders>,
    pub senior_action_editor_identity_readers: Vec<IdentityReaders>,
    pub request_form_id: Option<String>,
    /// Initial members of the editors-in-chief group
    pub editors_in_chief: Vec<String>,
}

impl FileVenueConfig {
    /// Build the domain venue, failing on a malformed id.
    pub fn to_venue(&self) -> Result<Venue, DomainError> {
        let mut venue = Venue::new(self.id.trim())?
            .with_action_editors(self.use_action_editors)
            .with_senior_action_editors(self.use_senior_action_editors);
        venue.name = self.name.clone();
        venue.short_name = self.short_name.clone();
        venue.website = self.website.clone();
        venue.contact = self.contact.clone();
        venue.roles = self.roles.clone();
        venue.submission_stage = self.submission_stage.clone();
        venue.review_stage = self.review_stage.clone();
        venue.meta_review_stage = self.meta_review_stage.clone();
        venue.decision_stage = self.decision_stage.clone();
        venue.bid_stages = self.bid_stages.clone();
        venue.reviewer_identity_readers = self.reviewer_identity_readers.clone();
        venue.action_editor_identity_readers = self.action_editor_identity_readers.clone();
        venue.senior_action_editor_identity_readers =
            self.senior_action_editor_identity_readers.clone();
        venue.request_form_id = self.request_form_id.clone();
        Ok(venue)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingValue {
                    field: "venue.id".to_string(),
                },
                message: "venue.id is not set".to_string(),
            });
        } else if let Err(e) = self.to_venue() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "venue.id".to_string(),
                    value: self.id.clone(),
                },
                message: e.to_string(),
            });
        }

        let roles = [
            ("editors_in_chief", &self.roles.editors_in_chief),
            ("authors", &self.roles.authors),
            ("reviewers", &self.roles.reviewers),
            ("action_editors", &self.roles.action_editors),
            ("senior_action_editors", &self.roles.senior_action_editors),
        ];
        for (field, name) in roles {
            if name.trim().is_empty() || name.contains('/') {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidValue {
                        field: format!("venue.roles.{}", field),
                        value: name.clone(),
                    },
                    message: format!(
                        "venue.roles.{}: role names must be a single non-empty path segment",
                        field
                    ),
                });
            }
        }

        let policies = [
            ("reviewer_identity_readers", &self.reviewer_identity_readers),
            (
                "action_editor_identity_readers",
                &self.action_editor_identity_readers,
            ),
            (
                "senior_action_editor_identity_readers",
                &self.senior_action_editor_identity_readers,
            ),
        ];
        for (field, policy) in policies {
            for reader in policy {
                if !self.uses_role_of(*reader) {
                    issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::UnusedIdentityReader {
                            field: format!("venue.{}", field),
                            value: reader.to_string(),
                        },
                        message: format!(
                            "venue.{}: '{}' refers to a role this venue does not use and is ignored",
                            field, reader
                        ),
                    });
                }
            }
        }

        issues
    }

    fn uses_role_of(&self, reader: IdentityReaders) -> bool {
        match reader {
            IdentityReaders::SeniorAreaChairs | IdentityReaders::SeniorAreaChairsAssigned => {
                self.use_senior_action_editors
            }
            IdentityReaders::AreaChairs | IdentityReaders::AreaChairsAssigned => {
                self.use_action_editors
            }
            _ => true,
        }
    }
}

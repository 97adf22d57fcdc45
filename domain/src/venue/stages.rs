//! Stage settings published on the venue group.
//!
//! Only the fields that end up in the venue's group content are modelled;
//! stage scheduling and invitations live in the remote platform.

use serde::{Deserialize, Serialize};

/// Submission stage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionStage {
    /// Stage name, also used as the per-paper group prefix (`Submission3`)
    pub name: String,
    /// Submissions are publicly visible
    pub public: bool,
    /// Withdrawn submissions stay publicly visible
    pub withdrawn_submission_public: bool,
    /// Desk-rejected submissions stay publicly visible
    pub desk_rejected_submission_public: bool,
}

impl Default for SubmissionStage {
    fn default() -> Self {
        Self {
            name: "Submission".to_string(),
            public: false,
            withdrawn_submission_public: false,
            desk_rejected_submission_public: false,
        }
    }
}

/// Review stage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewStage {
    pub name: String,
    pub rating_field_name: String,
    pub confidence_field_name: String,
}

impl Default for ReviewStage {
    fn default() -> Self {
        Self {
            name: "Official_Review".to_string(),
            rating_field_name: "rating".to_string(),
            confidence_field_name: "confidence".to_string(),
        }
    }
}

/// Meta-review stage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaReviewStage {
    pub name: String,
}

impl Default for MetaReviewStage {
    fn default() -> Self {
        Self {
            name: "Meta_Review".to_string(),
        }
    }
}

/// Decision stage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionStage {
    pub name: String,
}

impl Default for DecisionStage {
    fn default() -> Self {
        Self {
            name: "Decision".to_string(),
        }
    }
}

/// Bid stage settings for one committee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidStage {
    pub name: String,
    /// Committee group the bids belong to; the reviewers group when unset
    pub committee_id: Option<String>,
}

impl Default for BidStage {
    fn default() -> Self {
        Self {
            name: "Bid".to_string(),
            committee_id: None,
        }
    }
}

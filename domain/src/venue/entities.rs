//! Venue entity and derived identifiers.
//!
//! Every group and invitation id used during provisioning is derived from
//! the venue id and the configured role names; nothing is looked up.

use super::identity::IdentityReaders;
use super::stages::{BidStage, DecisionStage, MetaReviewStage, ReviewStage, SubmissionStage};
use crate::core::constants::SUBMITTED_SUFFIX;
use crate::core::error::DomainError;
use crate::group::group_id;
use serde::{Deserialize, Serialize};

/// Names of the committee roles, used as group id suffixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleNames {
    pub editors_in_chief: String,
    pub authors: String,
    pub reviewers: String,
    pub action_editors: String,
    pub senior_action_editors: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            editors_in_chief: "Program_Chairs".to_string(),
            authors: "Authors".to_string(),
            reviewers: "Reviewers".to_string(),
            action_editors: "Area_Chairs".to_string(),
            senior_action_editors: "Senior_Area_Chairs".to_string(),
        }
    }
}

/// One managed review cycle (Entity)
///
/// Constructed once per provisioning run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
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
}

impl Venue {
    /// Create a venue with default roles and stages.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        group_id::validate_path(&id).map_err(|_| DomainError::InvalidVenueId(id.clone()))?;
        Ok(Self {
            id,
            name: None,
            short_name: None,
            website: None,
            contact: None,
            use_action_editors: false,
            use_senior_action_editors: false,
            roles: RoleNames::default(),
            submission_stage: SubmissionStage::default(),
            review_stage: None,
            meta_review_stage: None,
            decision_stage: None,
            bid_stages: Vec::new(),
            reviewer_identity_readers: Vec::new(),
            action_editor_identity_readers: Vec::new(),
            senior_action_editor_identity_readers: Vec::new(),
            request_form_id: None,
        })
    }

    pub fn with_action_editors(mut self, enabled: bool) -> Self {
        self.use_action_editors = enabled;
        self
    }

    pub fn with_senior_action_editors(mut self, enabled: bool) -> Self {
        self.use_senior_action_editors = enabled;
        self
    }

    // ==================== Invitations ====================

    /// Invitation authorising edits inside the venue namespace
    pub fn meta_invitation_id(&self) -> String {
        format!("{}/-/Edit", self.id)
    }

    pub fn submission_id(&self) -> String {
        format!("{}/-/{}", self.id, self.submission_stage.name)
    }

    pub fn submission_venue_id(&self) -> String {
        format!("{}/{}", self.id, self.submission_stage.name)
    }

    pub fn withdrawn_submission_venue_id(&self) -> String {
        format!("{}/Withdrawn_{}", self.id, self.submission_stage.name)
    }

    pub fn desk_rejected_submission_venue_id(&self) -> String {
        format!("{}/Desk_Rejected_{}", self.id, self.submission_stage.name)
    }

    pub fn custom_max_papers_id(&self, committee_id: &str) -> String {
        format!("{}/-/Custom_Max_Papers", committee_id)
    }

    pub fn affinity_score_id(&self, committee_id: &str) -> String {
        format!("{}/-/Affinity_Score", committee_id)
    }

    pub fn conflict_score_id(&self, committee_id: &str) -> String {
        format!("{}/-/Conflict", committee_id)
    }

    pub fn recruitment_id(&self, committee_id: &str) -> String {
        format!("{}/-/Recruitment", committee_id)
    }

    // ==================== Groups ====================

    /// Namespace holding every per-paper group (`{venue}/Submission`)
    pub fn submission_prefix(&self) -> String {
        self.submission_venue_id()
    }

    /// Per-paper namespace (`{venue}/Submission{n}`)
    pub fn paper_prefix(&self, number: u64) -> String {
        format!("{}/{}{}", self.id, self.submission_stage.name, number)
    }

    fn role_id(&self, role: &str, number: Option<u64>) -> String {
        match number {
            Some(n) => format!("{}/{}", self.paper_prefix(n), role),
            None => format!("{}/{}", self.id, role),
        }
    }

    pub fn editors_in_chief_id(&self) -> String {
        self.role_id(&self.roles.editors_in_chief, None)
    }

    pub fn authors_id(&self, number: Option<u64>) -> String {
        self.role_id(&self.roles.authors, number)
    }

    pub fn authors_accepted_id(&self) -> String {
        format!("{}/Accepted", self.authors_id(None))
    }

    pub fn reviewers_id(&self, number: Option<u64>) -> String {
        self.role_id(&self.roles.reviewers, number)
    }

    pub fn reviewers_submitted_id(&self, number: u64) -> String {
        format!("{}/{}", self.reviewers_id(Some(number)), SUBMITTED_SUFFIX)
    }

    pub fn action_editors_id(&self, number: Option<u64>) -> String {
        self.role_id(&self.roles.action_editors, number)
    }

    pub fn senior_action_editors_id(&self, number: Option<u64>) -> String {
        self.role_id(&self.roles.senior_action_editors, number)
    }

    pub fn committee_id(&self, committee_name: &str) -> String {
        format!("{}/{}", self.id, committee_name)
    }

    pub fn committee_invited_id(&self, committee_name: &str) -> String {
        format!("{}/Invited", self.committee_id(committee_name))
    }

    pub fn committee_declined_id(&self, committee_name: &str) -> String {
        format!("{}/Declined", self.committee_id(committee_name))
    }

    /// Committee roles enabled for this venue, in provisioning order
    pub fn committee_names(&self) -> Vec<String> {
        let mut names = vec![self.roles.reviewers.clone()];
        if self.use_action_editors {
            names.push(self.roles.action_editors.clone());
        }
        if self.use_senior_action_editors {
            names.push(self.roles.senior_action_editors.clone());
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> Venue {
        Venue::new("org/Venue/2024/Track").unwrap()
    }

    #[test]
    fn test_new_rejects_malformed_id() {
        assert!(matches!(
            Venue::new("org//Venue"),
            Err(DomainError::InvalidVenueId(_))
        ));
        assert!(Venue::new("").is_err());
    }

    #[test]
    fn test_role_ids() {
        let venue = venue();
        assert_eq!(venue.editors_in_chief_id(), "org/Venue/2024/Track/Program_Chairs");
        assert_eq!(venue.authors_id(None), "org/Venue/2024/Track/Authors");
        assert_eq!(
            venue.authors_id(Some(3)),
            "org/Venue/2024/Track/Submission3/Authors"
        );
        assert_eq!(
            venue.authors_accepted_id(),
            "org/Venue/2024/Track/Authors/Accepted"
        );
        assert_eq!(
            venue.reviewers_submitted_id(2),
            "org/Venue/2024/Track/Submission2/Reviewers/Submitted"
        );
        assert_eq!(
            venue.senior_action_editors_id(Some(1)),
            "org/Venue/2024/Track/Submission1/Senior_Area_Chairs"
        );
    }

    #[test]
    fn test_custom_role_and_stage_names() {
        let mut venue = venue();
        venue.roles.action_editors = "Action_Editors".to_string();
        venue.submission_stage.name = "Paper".to_string();
        assert_eq!(
            venue.action_editors_id(Some(7)),
            "org/Venue/2024/Track/Paper7/Action_Editors"
        );
        assert_eq!(venue.submission_prefix(), "org/Venue/2024/Track/Paper");
        assert_eq!(venue.submission_id(), "org/Venue/2024/Track/-/Paper");
    }

    #[test]
    fn test_recruitment_ids() {
        let venue = venue();
        assert_eq!(
            venue.committee_invited_id("Reviewers"),
            "org/Venue/2024/Track/Reviewers/Invited"
        );
        assert_eq!(
            venue.committee_declined_id("Reviewers"),
            "org/Venue/2024/Track/Reviewers/Declined"
        );
    }

    #[test]
    fn test_matching_ids() {
        let venue = venue();
        let reviewers = venue.reviewers_id(None);
        assert_eq!(
            venue.affinity_score_id(&reviewers),
            "org/Venue/2024/Track/Reviewers/-/Affinity_Score"
        );
        assert_eq!(
            venue.conflict_score_id(&reviewers),
            "org/Venue/2024/Track/Reviewers/-/Conflict"
        );
    }

    #[test]
    fn test_committee_names_follow_flags() {
        let venue = venue();
        assert_eq!(venue.committee_names(), vec!["Reviewers"]);
        let venue = venue
            .with_action_editors(true)
            .with_senior_action_editors(true);
        assert_eq!(
            venue.committee_names(),
            vec!["Reviewers", "Area_Chairs", "Senior_Area_Chairs"]
        );
    }
}

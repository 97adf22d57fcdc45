//! Types for the provisioning use case: errors, outcomes, batch reports.

use crate::ports::group_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use venue_domain::{DomainError, Group, LandingPageError};

/// Errors that abort a provisioning operation
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Landing page of {group_id} cannot be updated: {source}")]
    LandingPage {
        group_id: String,
        #[source]
        source: LandingPageError,
    },

    #[error("Group {0} is missing right after it was posted")]
    MissingAfterPost(String),
}

impl ProvisionError {
    /// Check if the underlying store reported a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProvisionError::Store(e) if e.is_not_found())
    }
}

/// Result of a create-if-absent step
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned {
    /// The group did not exist and was posted
    Created(Group),
    /// The group already existed and was left untouched
    Existing(Group),
}

impl Provisioned {
    pub fn group(&self) -> &Group {
        match self {
            Provisioned::Created(group) | Provisioned::Existing(group) => group,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }

    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            id: self.group().id.clone(),
            created: self.is_created(),
        }
    }
}

/// Serializable one-line view of a provisioned group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub id: String,
    pub created: bool,
}

/// A submission whose committee groups could not be provisioned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperFailure {
    pub number: u64,
    pub error: String,
}

/// Outcome of a per-submission fan-out
///
/// Failures never discard successes; both lists are sorted by paper number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Submissions whose groups are all in place
    pub succeeded: Vec<u64>,
    /// Submissions with at least one failed group
    pub failed: Vec<PaperFailure>,
    /// Ids of the groups posted during the batch
    pub posted: Vec<String>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn finish(mut self) -> Self {
        self.succeeded.sort_unstable();
        self.failed.sort_by_key(|f| f.number);
        self.posted.sort();
        self
    }
}

/// Outcome of creating the venue group and its path
#[derive(Debug, Clone)]
pub struct VenueGroupOutput {
    /// Path groups root first; the last one is the venue group as found
    /// before it was posted
    pub path_groups: Vec<Provisioned>,
    /// Ids of path groups whose landing page was rewritten
    pub landing_pages_updated: Vec<String>,
    /// The venue group after the content edit
    pub venue_group: Group,
}

/// Input for a full venue provisioning run
#[derive(Debug, Clone, Default)]
pub struct ProvisionVenueInput {
    /// Initial members of the editors-in-chief group
    pub editors_in_chief: Vec<String>,
    /// Create invited/declined pools for every enabled committee
    pub recruitment: bool,
}

impl ProvisionVenueInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_editors_in_chief<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        members: I,
    ) -> Self {
        self.editors_in_chief = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_recruitment(mut self, enabled: bool) -> Self {
        self.recruitment = enabled;
        self
    }
}

/// Output of a full venue provisioning run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvisionVenueOutput {
    pub venue_id: String,
    pub path_groups: Vec<GroupSummary>,
    pub landing_pages_updated: Vec<String>,
    pub role_groups: Vec<GroupSummary>,
    pub recruitment_groups: Vec<GroupSummary>,
}

impl ProvisionVenueOutput {
    /// Number of groups created by the run
    pub fn created_count(&self) -> usize {
        self.path_groups
            .iter()
            .chain(&self.role_groups)
            .chain(&self.recruitment_groups)
            .filter(|g| g.created)
            .count()
    }
}

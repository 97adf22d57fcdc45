//! Identity-reader policy
//!
//! Decides which groups may see the real identity behind an anonymous
//! committee member of a paper.

use super::entities::Venue;
use serde::{Deserialize, Serialize};

/// A class of readers granted identity visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityReaders {
    ProgramChairs,
    SeniorAreaChairs,
    SeniorAreaChairsAssigned,
    AreaChairs,
    AreaChairsAssigned,
    Reviewers,
    ReviewersAssigned,
    ReviewersSubmitted,
}

impl IdentityReaders {
    /// Canonical order in which readers are emitted
    pub const ALL: [IdentityReaders; 8] = [
        IdentityReaders::ProgramChairs,
        IdentityReaders::SeniorAreaChairs,
        IdentityReaders::SeniorAreaChairsAssigned,
        IdentityReaders::AreaChairs,
        IdentityReaders::AreaChairsAssigned,
        IdentityReaders::Reviewers,
        IdentityReaders::ReviewersAssigned,
        IdentityReaders::ReviewersSubmitted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityReaders::ProgramChairs => "program_chairs",
            IdentityReaders::SeniorAreaChairs => "senior_area_chairs",
            IdentityReaders::SeniorAreaChairsAssigned => "senior_area_chairs_assigned",
            IdentityReaders::AreaChairs => "area_chairs",
            IdentityReaders::AreaChairsAssigned => "area_chairs_assigned",
            IdentityReaders::Reviewers => "reviewers",
            IdentityReaders::ReviewersAssigned => "reviewers_assigned",
            IdentityReaders::ReviewersSubmitted => "reviewers_submitted",
        }
    }

    /// Group id this reader class resolves to for paper `number`.
    ///
    /// Returns `None` when the class belongs to a role the venue does not use.
    pub fn resolve(&self, venue: &Venue, number: u64) -> Option<String> {
        match self {
            IdentityReaders::ProgramChairs => Some(venue.editors_in_chief_id()),
            IdentityReaders::SeniorAreaChairs => venue
                .use_senior_action_editors
                .then(|| venue.senior_action_editors_id(None)),
            IdentityReaders::SeniorAreaChairsAssigned => venue
                .use_senior_action_editors
                .then(|| venue.senior_action_editors_id(Some(number))),
            IdentityReaders::AreaChairs => venue
                .use_action_editors
                .then(|| venue.action_editors_id(None)),
            IdentityReaders::AreaChairsAssigned => venue
                .use_action_editors
                .then(|| venue.action_editors_id(Some(number))),
            IdentityReaders::Reviewers => Some(venue.reviewers_id(None)),
            IdentityReaders::ReviewersAssigned => Some(venue.reviewers_id(Some(number))),
            IdentityReaders::ReviewersSubmitted => Some(venue.reviewers_submitted_id(number)),
        }
    }
}

impl std::fmt::Display for IdentityReaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IdentityReaders {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityReaders::ALL
            .into_iter()
            .find(|reader| reader.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown identity reader: {}", s))
    }
}

/// Resolve an identity-reader policy into group ids for paper `number`.
///
/// Always starts with the venue id. Entries are emitted in canonical order,
/// without duplicates, skipping classes whose role is disabled.
pub fn identity_readers(venue: &Venue, number: u64, policy: &[IdentityReaders]) -> Vec<String> {
    let mut readers = vec![venue.id.clone()];
    for reader in IdentityReaders::ALL {
        if !policy.contains(&reader) {
            continue;
        }
        if let Some(id) = reader.resolve(venue, number)
            && !readers.contains(&id)
        {
            readers.push(id);
        }
    }
    readers
}

//! Domain layer for venue-provision
//!
//! This crate contains venues, groups and the committee permission policy.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Venue
//!
//! A venue is one review cycle identified by a slash-delimited path
//! (`org/Venue/2024/Track`). Every group id used during provisioning is
//! derived from it.
//!
//! ## Group hierarchy
//!
//! - **Path groups**: one per venue id prefix, each with a landing page
//! - **Role groups**: editors-in-chief, authors, reviewers, action editors,
//!   senior action editors
//! - **Paper groups**: one committee group per submission and role
//! - **Recruitment groups**: committee, invited and declined pools

pub mod config;
pub mod core;
pub mod group;
pub mod profile;
pub mod submission;
pub mod venue;
pub mod webfield;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::{constants, error::DomainError};
pub use group::{Group, GroupDetails, GroupEdit};
pub use profile::{Profile, ProfileContent, ProfileName};
pub use submission::Submission;
pub use venue::{
    BidStage, DecisionStage, IdentityReaders, MetaReviewStage, ReviewStage, RoleNames,
    SubmissionStage, Venue, identity_readers,
};
pub use webfield::{LandingHeader, LandingLink, LandingPageError};

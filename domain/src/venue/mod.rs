//! Venue configuration, derived identifiers and committee policy.

pub mod content;
pub mod entities;
pub mod identity;
pub mod policy;
pub mod stages;

pub use entities::{RoleNames, Venue};
pub use identity::{IdentityReaders, identity_readers};
pub use stages::{BidStage, DecisionStage, MetaReviewStage, ReviewStage, SubmissionStage};

//! Well-known identities and invitations of the remote platform.

/// Reader token granting public visibility
pub const EVERYONE: &str = "everyone";

/// Super user identity that signs bootstrap edits
pub const SUPER_USER: &str = "~Super_User1";

/// Invitation used for edits outside of a venue's own namespace
pub const DEFAULT_EDIT_INVITATION: &str = "openreview.net/-/Edit";

/// Group listing every provisioned venue
pub const VENUES_GROUP: &str = "venues";

/// Group listing every host organisation
pub const HOST_GROUP: &str = "host";

/// Suffix of the per-paper group tracking completed reviews
pub const SUBMITTED_SUFFIX: &str = "Submitted";

/// Administrative identity that signs profile bootstrap groups
pub const ROOT_USER: &str = "OpenReview.net";

//! Static page templates compiled into the binary.

/// Landing page listing child groups; carries the substitution tokens
pub const LANDING: &str = include_str!("../../templates/landingWebfield.js");
pub const VENUE_HOMEPAGE: &str = include_str!("../../templates/homepageWebfield.js");
pub const EDITORS_IN_CHIEF: &str = include_str!("../../templates/editorsInChiefWebfield.js");
pub const AUTHORS: &str = include_str!("../../templates/authorsWebfield.js");
pub const REVIEWERS: &str = include_str!("../../templates/reviewersWebfield.js");
/// Shared by action editors and senior action editors
pub const ACTION_EDITORS: &str = include_str!("../../templates/actionEditorsWebfield.js");

// Substitution tokens of the landing template
pub const GROUP_ID_TOKEN: &str = "var GROUP_ID = '';";
pub const PARENT_GROUP_ID_TOKEN: &str = "var PARENT_GROUP_ID = '';";
pub const HEADER_TOKEN: &str = "var HEADER = {};";
pub const VENUE_LINKS_TOKEN: &str = "var VENUE_LINKS = [];";

/// Marker after which new links are spliced into an existing page
pub const VENUE_LINKS_MARKER: &str = "VENUE_LINKS = [";

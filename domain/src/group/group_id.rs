//! Hierarchical group identifiers.
//!
//! Group ids are slash-delimited paths. A group's position in the hierarchy
//! is fully determined by its id: the parent is the id with the last segment
//! removed.

use crate::core::error::DomainError;

/// Validate that an id is a well-formed slash-delimited path.
///
/// Rejects empty ids, leading/trailing slashes and empty segments.
pub fn validate_path(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() || id.split('/').any(|segment| segment.trim().is_empty()) {
        return Err(DomainError::InvalidGroupId(id.to_string()));
    }
    Ok(())
}

/// Cumulative path prefixes of an id, root first.
///
/// `org/Venue/2024` yields `["org", "org/Venue", "org/Venue/2024"]`.
pub fn path_prefixes(id: &str) -> Vec<String> {
    let segments: Vec<&str> = id.split('/').collect();
    (1..=segments.len())
        .map(|end| segments[..end].join("/"))
        .collect()
}

/// Whether `candidate` sits exactly one segment below `parent_id`.
pub fn is_direct_child_of(candidate: &str, parent_id: &str) -> bool {
    candidate
        .strip_prefix(parent_id)
        .and_then(|rest| rest.strip_prefix('/'))
        .map(|rest| {
            let rest = rest.strip_suffix('/').unwrap_or(rest);
            !rest.is_empty() && !rest.contains('/')
        })
        .unwrap_or(false)
}

/// Regex pattern selecting the direct children of `parent_id`.
///
/// Matches the query the remote store understands: `{parent}/[^/]+/?$`.
pub fn direct_children_pattern(parent_id: &str) -> String {
    format!("{}/[^/]+/?$", parent_id)
}

/// Whether every alphabetic character of the id is lowercase.
///
/// Used to tell an organisation domain segment (e.g. `auai.org`) apart
/// from a venue segment (e.g. `ICML`).
pub fn is_lowercase(id: &str) -> bool {
    id == id.to_lowercase()
}

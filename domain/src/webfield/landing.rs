//! Landing pages for intermediate path groups.
//!
//! A fresh page is rendered from [`templates::LANDING`]. An existing page is
//! never re-rendered: new child links are spliced into its `VENUE_LINKS`
//! array so that manual edits elsewhere on the page survive.

use super::templates;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;
use thiserror::Error;

/// Errors while updating an existing landing page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingPageError {
    #[error("landing page has no `{marker}` marker")]
    MissingMarker { marker: &'static str },
}

/// Title block of a landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingHeader {
    pub title: String,
    pub description: String,
}

impl LandingHeader {
    pub fn for_group(group_id: &str) -> Self {
        Self {
            title: group_id.to_string(),
            description: String::new(),
        }
    }
}

/// A link to a child group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingLink {
    pub url: String,
    pub name: String,
}

impl LandingLink {
    pub fn to_group(group_id: &str) -> Self {
        Self {
            url: format!("/group?id={}", group_id),
            name: group_id.to_string(),
        }
    }
}

/// JSON formatter writing `", "` and `": "` separators.
///
/// Matches the layout of pages already stored on the platform so that
/// spliced links look like the ones rendered before them.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    // Plain structs and vectors of strings cannot fail to serialize
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Whether an existing page already links to `child_id`
fn links_to(web: &str, child_id: &str) -> bool {
    web.contains(&format!("\"{}\"", child_id)) || web.contains(&format!("id={}\"", child_id))
}

/// Links for the children not yet present on the page.
///
/// With no existing page every child is new. Children keep their order.
pub fn new_links<'a>(
    existing_web: Option<&str>,
    children: impl IntoIterator<Item = &'a str>,
) -> Vec<LandingLink> {
    children
        .into_iter()
        .filter(|child| existing_web.is_none_or(|web| !links_to(web, child)))
        .map(LandingLink::to_group)
        .collect()
}

/// Render a new landing page for `group_id`.
pub fn render(group_id: &str, parent_id: Option<&str>, links: &[LandingLink]) -> String {
    let mut content = templates::LANDING.replace(
        templates::GROUP_ID_TOKEN,
        &format!("var GROUP_ID = '{}';", group_id),
    );
    if let Some(parent_id) = parent_id {
        content = content.replace(
            templates::PARENT_GROUP_ID_TOKEN,
            &format!("var PARENT_GROUP_ID = '{}';", parent_id),
        );
    }
    content = content.replace(
        templates::HEADER_TOKEN,
        &format!(
            "var HEADER = {};",
            to_spaced_json(&LandingHeader::for_group(group_id))
        ),
    );
    content.replace(
        templates::VENUE_LINKS_TOKEN,
        &format!("var VENUE_LINKS = {};", to_spaced_json(links)),
    )
}

/// Insert `links` at the start of the page's `VENUE_LINKS` array.
///
/// Everything outside the inserted text is kept byte for byte. The first
/// occurrence of the marker is used.
pub fn splice_links(existing: &str, links: &[LandingLink]) -> Result<String, LandingPageError> {
    let marker = templates::VENUE_LINKS_MARKER;
    let start = existing
        .find(marker)
        .map(|idx| idx + marker.len())
        .ok_or(LandingPageError::MissingMarker { marker })?;

    if links.is_empty() {
        return Ok(existing.to_string());
    }

    let array = to_spaced_json(links);
    let inner = &array[1..array.len() - 1];
    let (head, tail) = existing.split_at(start);
    let separator = if tail.trim_start().starts_with(']') { "" } else { "," };

    Ok(format!("{head}{inner}{separator}{tail}"))
}

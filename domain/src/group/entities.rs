//! Group entities
//!
//! A [`Group`] doubles as a permissioned member list and, optionally, a
//! rendered page. Every field except the id is optional so that the same
//! type can describe both a full group and a partial edit (e.g. only `web`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Extra flags attached to a group on creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetails {
    #[serde(default)]
    pub writable: bool,
}

/// A group in the remote store (Entity)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonreaders: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    /// Readers allowed to see the identity behind anonymous member ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deanonymizers: Option<Vec<String>>,
    /// Request per-member anonymous identity sub-groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonids: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<GroupDetails>,
}

fn to_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_readers<I: IntoIterator<Item = S>, S: Into<String>>(mut self, readers: I) -> Self {
        self.readers = Some(to_strings(readers));
        self
    }

    pub fn with_nonreaders<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        nonreaders: I,
    ) -> Self {
        self.nonreaders = Some(to_strings(nonreaders));
        self
    }

    pub fn with_writers<I: IntoIterator<Item = S>, S: Into<String>>(mut self, writers: I) -> Self {
        self.writers = Some(to_strings(writers));
        self
    }

    pub fn with_signatures<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        signatures: I,
    ) -> Self {
        self.signatures = Some(to_strings(signatures));
        self
    }

    pub fn with_signatories<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        signatories: I,
    ) -> Self {
        self.signatories = Some(to_strings(signatories));
        self
    }

    pub fn with_members<I: IntoIterator<Item = S>, S: Into<String>>(mut self, members: I) -> Self {
        self.members = Some(to_strings(members));
        self
    }

    pub fn with_deanonymizers<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        deanonymizers: I,
    ) -> Self {
        self.deanonymizers = Some(to_strings(deanonymizers));
        self
    }

    pub fn with_anonids(mut self, anonids: bool) -> Self {
        self.anonids = Some(anonids);
        self
    }

    pub fn with_web(mut self, web: impl Into<String>) -> Self {
        self.web = Some(web.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_content(mut self, content: Map<String, Value>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn writable(mut self) -> Self {
        self.details = Some(GroupDetails { writable: true });
        self
    }

    // ==================== Accessors ====================

    pub fn readers(&self) -> &[String] {
        self.readers.as_deref().unwrap_or_default()
    }

    pub fn nonreaders(&self) -> &[String] {
        self.nonreaders.as_deref().unwrap_or_default()
    }

    pub fn writers(&self) -> &[String] {
        self.writers.as_deref().unwrap_or_default()
    }

    pub fn signatories(&self) -> &[String] {
        self.signatories.as_deref().unwrap_or_default()
    }

    pub fn members(&self) -> &[String] {
        self.members.as_deref().unwrap_or_default()
    }

    pub fn deanonymizers(&self) -> &[String] {
        self.deanonymizers.as_deref().unwrap_or_default()
    }

    /// Overlay the fields present in `edit` onto this group.
    ///
    /// Fields absent from the edit keep their current value, which is how
    /// the remote store applies partial group edits.
    pub fn apply(&mut self, edit: Group) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if edit.$field.is_some() { self.$field = edit.$field; })*
            };
        }
        overlay!(
            readers,
            nonreaders,
            writers,
            signatures,
            signatories,
            members,
            deanonymizers,
            anonids,
            web,
            host,
            details
        );
        if let Some(content) = edit.content {
            self.content.get_or_insert_with(Map::new).extend(content);
        }
    }
}

/// A signed edit posting a group through an invitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEdit {
    pub invitation: String,
    pub readers: Vec<String>,
    pub writers: Vec<String>,
    pub signatures: Vec<String>,
    pub group: Group,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_group_serializes_only_present_fields() {
        let group = Group::new("org/Venue").with_web("content");
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value, json!({"id": "org/Venue", "web": "content"}));
    }

    #[test]
    fn test_explicit_empty_list_is_serialized() {
        let group = Group::new("org").with_nonreaders(Vec::<String>::new());
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["nonreaders"], json!([]));
    }

    #[test]
    fn test_deserialize_remote_group() {
        let group: Group = serde_json::from_value(json!({
            "id": "org/Venue/Reviewers",
            "readers": ["org/Venue"],
            "members": ["~Ada_Lovelace1"],
            "anonids": true,
            "details": {"writable": true},
            "cdate": 1700000000000u64
        }))
        .unwrap();
        assert_eq!(group.readers(), ["org/Venue"]);
        assert_eq!(group.members(), ["~Ada_Lovelace1"]);
        assert_eq!(group.anonids, Some(true));
        assert!(group.nonreaders().is_empty());
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut group = Group::new("org")
            .with_readers(["everyone"])
            .with_members(["~A1"]);
        group.apply(Group::new("org").with_web("page"));
        assert_eq!(group.readers(), ["everyone"]);
        assert_eq!(group.members(), ["~A1"]);
        assert_eq!(group.web.as_deref(), Some("page"));
    }

    #[test]
    fn test_apply_merges_content() {
        let mut first = Map::new();
        first.insert("title".to_string(), json!({"value": "Venue"}));
        let mut second = Map::new();
        second.insert("website".to_string(), json!({"value": "venue.org"}));

        let mut group = Group::new("org").with_content(first);
        group.apply(Group::new("org").with_content(second));

        let content = group.content.unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content["title"], json!({"value": "Venue"}));
    }
}

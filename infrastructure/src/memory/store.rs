//! In-memory platform store
//!
//! Backs `--dry-run`: edits are applied to a local map the way the platform
//! applies them and recorded so they can be reported afterwards.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use venue_application::{GroupQuery, GroupStore, ProfileStore, StoreError};
use venue_domain::constants::{HOST_GROUP, VENUES_GROUP};
use venue_domain::group::group_id;
use venue_domain::{Group, GroupEdit, Profile};

#[derive(Default)]
struct State {
    groups: BTreeMap<String, Group>,
    profiles: Vec<Profile>,
    edits: Vec<GroupEdit>,
}

/// Group and profile store kept in process memory
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Store holding only the platform-wide `venues` and `host` groups
    pub fn new() -> Self {
        let store = Self::default();
        for id in [VENUES_GROUP, HOST_GROUP] {
            store.insert(Group::new(id).with_members(Vec::<String>::new()));
        }
        store
    }

    pub fn insert(&self, group: Group) {
        self.lock().groups.insert(group.id.clone(), group);
    }

    /// Every edit accepted so far, in order
    pub fn edits(&self) -> Vec<GroupEdit> {
        self.lock().edits.clone()
    }

    pub fn groups(&self) -> Vec<Group> {
        self.lock().groups.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock leaves the map consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GroupStore for InMemoryStore {
    async fn get_group(&self, id: &str) -> Result<Option<Group>, StoreError> {
        Ok(self.lock().groups.get(id).cloned())
    }

    async fn post_group_edit(&self, edit: GroupEdit) -> Result<(), StoreError> {
        debug!("[dry-run] edit of {} via {}", edit.group.id, edit.invitation);
        let mut state = self.lock();
        let update = edit.group.clone();
        state
            .groups
            .entry(update.id.clone())
            .and_modify(|group| group.apply(update.clone()))
            .or_insert(update);
        state.edits.push(edit);
        Ok(())
    }

    async fn list_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, StoreError> {
        let state = self.lock();
        Ok(state
            .groups
            .values()
            .filter(|group| match query {
                GroupQuery::Prefix(prefix) => group.id.starts_with(prefix.as_str()),
                GroupQuery::Children(parent) => group_id::is_direct_child_of(&group.id, parent),
            })
            .cloned()
            .collect())
    }

    async fn add_members(&self, group_id: &str, members: &[String]) -> Result<(), StoreError> {
        let mut state = self.lock();
        let group = state
            .groups
            .get_mut(group_id)
            .ok_or_else(|| StoreError::NotFound(format!("Group Not Found: {}", group_id)))?;
        let current = group.members.get_or_insert_with(Vec::new);
        for member in members {
            if !current.contains(member) {
                current.push(member.clone());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, email_or_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .lock()
            .profiles
            .iter()
            .find(|p| p.id == email_or_id || p.content.emails.iter().any(|e| e == email_or_id))
            .cloned())
    }

    async fn tilde_username(
        &self,
        first: &str,
        last: &str,
        middle: Option<&str>,
    ) -> Result<String, StoreError> {
        let base = match middle {
            Some(middle) => format!("~{}_{}_{}", first, middle, last),
            None => format!("~{}_{}", first, last),
        }
        .replace(' ', "_");
        let state = self.lock();
        let next = (1..)
            .find(|n| !state.groups.contains_key(&format!("{}{}", base, n)))
            .unwrap_or(1);
        Ok(format!("{}{}", base, next))
    }

    async fn post_group(&self, group: Group) -> Result<(), StoreError> {
        self.insert(group);
        Ok(())
    }

    async fn post_profile(&self, profile: Profile) -> Result<Profile, StoreError> {
        self.lock().profiles.push(profile.clone());
        Ok(profile)
    }
}

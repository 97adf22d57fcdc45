//! In-memory store for use case tests.

use crate::ports::group_store::{GroupQuery, GroupStore, StoreError};
use crate::ports::profile_store::ProfileStore;
use crate::ports::progress::{ProvisionProgressNotifier, ProvisionStep};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use venue_domain::group::group_id;
use venue_domain::{Group, GroupEdit, Profile};

#[derive(Default)]
pub struct MockStore {
    pub groups: Mutex<BTreeMap<String, Group>>,
    pub edits: Mutex<Vec<GroupEdit>>,
    pub profiles: Mutex<Vec<Profile>>,
    pub posted_groups: Mutex<Vec<Group>>,
    /// Group ids whose edits are rejected
    pub failing: Mutex<HashSet<String>>,
    /// Group ids whose edits panic the calling task
    pub panicking: Mutex<HashSet<String>>,
    pub list_calls: Mutex<Vec<GroupQuery>>,
}

impl MockStore {
    /// Store seeded with the platform-wide `venues` and `host` groups
    pub fn new() -> Self {
        let store = Self::default();
        store.insert(Group::new("venues").with_members(Vec::<String>::new()));
        store.insert(Group::new("host").with_members(Vec::<String>::new()));
        store
    }

    pub fn insert(&self, group: Group) {
        self.groups
            .lock()
            .unwrap()
            .insert(group.id.clone(), group);
    }

    pub fn fail_on(&self, group_id: &str) {
        self.failing.lock().unwrap().insert(group_id.to_string());
    }

    pub fn panic_on(&self, group_id: &str) {
        self.panicking.lock().unwrap().insert(group_id.to_string());
    }

    pub fn group(&self, id: &str) -> Option<Group> {
        self.groups.lock().unwrap().get(id).cloned()
    }

    pub fn edit_count(&self) -> usize {
        self.edits.lock().unwrap().len()
    }

    pub fn edits_for(&self, id: &str) -> Vec<GroupEdit> {
        self.edits
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.group.id == id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GroupStore for MockStore {
    async fn get_group(&self, id: &str) -> Result<Option<Group>, StoreError> {
        Ok(self.group(id))
    }

    async fn post_group_edit(&self, edit: GroupEdit) -> Result<(), StoreError> {
        let panics = self.panicking.lock().unwrap().contains(&edit.group.id);
        if panics {
            panic!("store crashed while editing {}", edit.group.id);
        }
        if self.failing.lock().unwrap().contains(&edit.group.id) {
            return Err(StoreError::Remote {
                name: "ForbiddenError".to_string(),
                message: format!("cannot edit {}", edit.group.id),
                status: 403,
            });
        }
        let mut groups = self.groups.lock().unwrap();
        let id = edit.group.id.clone();
        match groups.get_mut(&id) {
            Some(existing) => existing.apply(edit.group.clone()),
            None => {
                groups.insert(id, edit.group.clone());
            }
        }
        self.edits.lock().unwrap().push(edit);
        Ok(())
    }

    async fn list_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, StoreError> {
        self.list_calls.lock().unwrap().push(query.clone());
        let groups = self.groups.lock().unwrap();
        Ok(groups
            .values()
            .filter(|g| match query {
                GroupQuery::Prefix(prefix) => g.id.starts_with(prefix.as_str()),
                GroupQuery::Children(parent) => group_id::is_direct_child_of(&g.id, parent),
            })
            .cloned()
            .collect())
    }

    async fn add_members(&self, group_id: &str, members: &[String]) -> Result<(), StoreError> {
        let mut groups = self.groups.lock().unwrap();
        let group = groups
            .get_mut(group_id)
            .ok_or_else(|| StoreError::NotFound(group_id.to_string()))?;
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
impl ProfileStore for MockStore {
    async fn get_profile(&self, email_or_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
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
        let taken = self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.id.starts_with(&base))
            .count();
        Ok(format!("{}{}", base, taken + 1))
    }

    async fn post_group(&self, group: Group) -> Result<(), StoreError> {
        self.posted_groups.lock().unwrap().push(group.clone());
        self.insert(group);
        Ok(())
    }

    async fn post_profile(&self, profile: Profile) -> Result<Profile, StoreError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(profile)
    }
}

/// Progress notifier recording every callback
#[derive(Default)]
pub struct RecordingProgress {
    pub started: Mutex<Vec<(ProvisionStep, usize)>>,
    pub items: Mutex<Vec<(String, bool)>>,
    pub completed: Mutex<Vec<ProvisionStep>>,
}

impl ProvisionProgressNotifier for RecordingProgress {
    fn on_step_start(&self, step: ProvisionStep, total_items: usize) {
        self.started.lock().unwrap().push((step, total_items));
    }

    fn on_item_complete(&self, _step: ProvisionStep, item: &str, success: bool) {
        self.items.lock().unwrap().push((item.to_string(), success));
    }

    fn on_step_complete(&self, step: ProvisionStep) {
        self.completed.lock().unwrap().push(step);
    }
}

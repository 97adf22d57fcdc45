//! Committee permission policy.
//!
//! Reader and writer lists for role groups and per-paper committee groups.
//! Groups of disabled roles never appear in any list.

use super::entities::Venue;
use super::identity::{IdentityReaders, identity_readers};
use crate::core::constants::EVERYONE;

fn push_unique(list: &mut Vec<String>, id: String) {
    if !list.contains(&id) {
        list.push(id);
    }
}

impl Venue {
    // ==================== Role groups ====================

    pub fn editors_in_chief_group_readers(&self) -> Vec<String> {
        vec![EVERYONE.to_string()]
    }

    pub fn authors_group_readers(&self) -> Vec<String> {
        vec![self.id.clone(), self.authors_id(None)]
    }

    pub fn reviewers_group_readers(&self) -> Vec<String> {
        let mut readers = vec![self.id.clone()];
        if self.use_senior_action_editors {
            readers.push(self.senior_action_editors_id(None));
        }
        if self.use_action_editors {
            readers.push(self.action_editors_id(None));
        }
        readers.push(self.reviewers_id(None));
        readers
    }

    pub fn action_editors_group_readers(&self) -> Vec<String> {
        let mut readers = vec![self.id.clone()];
        if self.use_senior_action_editors {
            readers.push(self.senior_action_editors_id(None));
        }
        readers.push(self.action_editors_id(None));
        readers
    }

    pub fn senior_action_editors_group_readers(&self) -> Vec<String> {
        vec![self.id.clone(), self.senior_action_editors_id(None)]
    }

    // ==================== Paper groups ====================

    /// Venue plus the paper's senior action editors and action editors, when enabled
    fn paper_supervisors(&self, number: u64) -> Vec<String> {
        let mut ids = vec![self.id.clone()];
        if self.use_senior_action_editors {
            ids.push(self.senior_action_editors_id(Some(number)));
        }
        if self.use_action_editors {
            ids.push(self.action_editors_id(Some(number)));
        }
        ids
    }

    pub fn reviewer_paper_group_readers(&self, number: u64) -> Vec<String> {
        let mut readers = self.paper_supervisors(number);
        readers.push(self.reviewers_id(Some(number)));
        readers
    }

    pub fn reviewer_paper_group_writers(&self, number: u64) -> Vec<String> {
        self.paper_supervisors(number)
    }

    pub fn reviewers_submitted_group_readers(&self, number: u64) -> Vec<String> {
        let mut readers = self.paper_supervisors(number);
        readers.push(self.reviewers_submitted_id(number));
        readers
    }

    pub fn action_editor_paper_group_readers(&self, number: u64) -> Vec<String> {
        let mut readers = vec![self.id.clone(), self.editors_in_chief_id()];
        if self.use_senior_action_editors {
            readers.push(self.senior_action_editors_id(Some(number)));
        }
        readers.push(self.action_editors_id(Some(number)));
        if self
            .action_editor_identity_readers
            .contains(&IdentityReaders::ReviewersAssigned)
        {
            readers.push(self.reviewers_id(Some(number)));
        }
        readers
    }

    /// Readers of the paper's senior action editor group.
    ///
    /// Resolved from the senior action editor identity policy, and always
    /// containing the venue and the group itself. The paper's authors are
    /// never readers.
    pub fn senior_action_editor_paper_group_readers(&self, number: u64) -> Vec<String> {
        let mut readers =
            identity_readers(self, number, &self.senior_action_editor_identity_readers);
        push_unique(&mut readers, self.senior_action_editors_id(Some(number)));
        let authors = self.authors_id(Some(number));
        readers.retain(|reader| *reader != authors);
        readers
    }

    pub fn reviewer_identity_readers_for(&self, number: u64) -> Vec<String> {
        identity_readers(self, number, &self.reviewer_identity_readers)
    }

    pub fn action_editor_identity_readers_for(&self, number: u64) -> Vec<String> {
        identity_readers(self, number, &self.action_editor_identity_readers)
    }
}

//! Signed group edits against the store.
//!
//! Every write of the provisioner goes through [`GroupWriter`], which picks
//! the authorising invitation and signature for the group's namespace.

use super::types::{ProvisionError, Provisioned};
use crate::ports::group_store::GroupStore;
use crate::ports::provision_logger::{ProvisionEvent, ProvisionLogger};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};
use venue_domain::constants::{DEFAULT_EDIT_INVITATION, SUPER_USER};
use venue_domain::{Group, GroupEdit, Venue};

/// Posts groups on behalf of a venue
pub struct GroupWriter<S: GroupStore + 'static> {
    store: Arc<S>,
    venue: Arc<Venue>,
    logger: Arc<dyn ProvisionLogger>,
}

impl<S: GroupStore + 'static> Clone for GroupWriter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            venue: Arc::clone(&self.venue),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<S: GroupStore + 'static> GroupWriter<S> {
    pub fn new(store: Arc<S>, venue: Arc<Venue>, logger: Arc<dyn ProvisionLogger>) -> Self {
        Self {
            store,
            venue,
            logger,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ProvisionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Invitation authorising an edit of `group_id`
    pub fn invitation_for(&self, group_id: &str) -> String {
        if group_id.starts_with(&self.venue.id) {
            self.venue.meta_invitation_id()
        } else {
            DEFAULT_EDIT_INVITATION.to_string()
        }
    }

    /// Post an edit and log it
    pub async fn post_edit(&self, edit: GroupEdit) -> Result<(), ProvisionError> {
        let group_id = edit.group.id.clone();
        let invitation = edit.invitation.clone();
        let fields: Vec<String> = match serde_json::to_value(&edit.group) {
            Ok(serde_json::Value::Object(map)) => {
                map.keys().filter(|k| *k != "id").cloned().collect()
            }
            _ => Vec::new(),
        };

        self.store.post_group_edit(edit).await?;

        debug!("Posted edit of {} via {}", group_id, invitation);
        self.logger.log(ProvisionEvent::new(
            "group_edit",
            json!({
                "group": group_id,
                "invitation": invitation,
                "fields": fields,
            }),
        ));
        Ok(())
    }

    /// Post a group under the venue's authority and read it back.
    ///
    /// The venue group itself is signed by the super user; every other group
    /// is signed by the venue.
    pub async fn post_group(&self, group: Group) -> Result<Group, ProvisionError> {
        let venue_id = self.venue.id.clone();
        let group_id = group.id.clone();
        let signature = if group_id == venue_id {
            SUPER_USER.to_string()
        } else {
            venue_id.clone()
        };

        self.post_edit(GroupEdit {
            invitation: self.invitation_for(&group_id),
            readers: vec![venue_id.clone()],
            writers: vec![venue_id],
            signatures: vec![signature],
            group,
        })
        .await?;

        self.store
            .get_group(&group_id)
            .await?
            .ok_or(ProvisionError::MissingAfterPost(group_id))
    }

    /// Post `group` unless a group with its id already exists.
    pub async fn ensure_group(&self, group: Group) -> Result<Provisioned, ProvisionError> {
        if let Some(existing) = self.store.get_group(&group.id).await? {
            debug!("Group {} already exists", existing.id);
            return Ok(Provisioned::Existing(existing));
        }
        let created = self.post_group(group).await?;
        info!("Created group {}", created.id);
        Ok(Provisioned::Created(created))
    }

    /// Add members to a group and log it
    pub async fn add_members(
        &self,
        group_id: &str,
        members: &[String],
    ) -> Result<(), ProvisionError> {
        self.store.add_members(group_id, members).await?;
        debug!("Added {} member(s) to {}", members.len(), group_id);
        self.logger.log(ProvisionEvent::new(
            "members_added",
            json!({ "group": group_id, "members": members }),
        ));
        Ok(())
    }

    pub fn log(&self, event: ProvisionEvent) {
        self.logger.log(event);
    }
}

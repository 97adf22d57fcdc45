//! Path groups and their landing pages.

use super::types::{ProvisionError, Provisioned};
use super::writer::GroupWriter;
use crate::ports::group_store::{GroupQuery, GroupStore};
use tracing::{debug, info};
use venue_domain::constants::{DEFAULT_EDIT_INVITATION, EVERYONE, SUPER_USER};
use venue_domain::group::group_id;
use venue_domain::webfield::landing;
use venue_domain::{Group, GroupEdit};

impl<S: GroupStore + 'static> GroupWriter<S> {
    /// Ensure a group exists for every prefix of `venue_id`, root first.
    ///
    /// Existing groups are returned as found; only absent prefixes are
    /// created. The terminal prefix is authorised by the venue's meta
    /// invitation, every other prefix by the generic edit invitation.
    pub async fn ensure_path_groups(
        &self,
        venue_id: &str,
    ) -> Result<Vec<Provisioned>, ProvisionError> {
        group_id::validate_path(venue_id)?;

        let mut groups = Vec::new();
        for prefix in group_id::path_prefixes(venue_id) {
            if let Some(group) = self.store().get_group(&prefix).await? {
                debug!("Path group {} already exists", prefix);
                groups.push(Provisioned::Existing(group));
                continue;
            }

            let invitation = if prefix == venue_id {
                self.venue().meta_invitation_id()
            } else {
                DEFAULT_EDIT_INVITATION.to_string()
            };
            self.post_edit(GroupEdit {
                invitation,
                readers: vec![EVERYONE.to_string()],
                writers: vec![SUPER_USER.to_string()],
                signatures: vec![SUPER_USER.to_string()],
                group: Group::new(prefix.clone())
                    .with_readers([EVERYONE])
                    .with_nonreaders(Vec::<String>::new())
                    .with_writers([prefix.as_str()])
                    .with_signatories([prefix.as_str()])
                    .with_signatures([SUPER_USER])
                    .with_members(Vec::<String>::new())
                    .writable(),
            })
            .await?;
            info!("Created path group {}", prefix);

            let group = self
                .store()
                .get_group(&prefix)
                .await?
                .ok_or_else(|| ProvisionError::MissingAfterPost(prefix.clone()))?;
            groups.push(Provisioned::Created(group));
        }

        Ok(groups)
    }

    /// Make `group`'s landing page link to all of its direct children.
    ///
    /// Renders a fresh page when the group has none, otherwise splices the
    /// missing links into the existing page. Returns the updated group, or
    /// `None` when every child is already linked.
    pub async fn update_landing_page(
        &self,
        group: &Group,
        parent: Option<&Group>,
    ) -> Result<Option<Group>, ProvisionError> {
        let children = self
            .store()
            .list_groups(&GroupQuery::Children(group.id.clone()))
            .await?;
        let existing_web = group.web.as_deref().filter(|web| !web.is_empty());
        let links = landing::new_links(existing_web, children.iter().map(|c| c.id.as_str()));

        let web = match existing_web {
            None => landing::render(&group.id, parent.map(|p| p.id.as_str()), &links),
            Some(_) if links.is_empty() => {
                debug!("Landing page of {} is up to date", group.id);
                return Ok(None);
            }
            Some(web) => {
                landing::splice_links(web, &links).map_err(|source| ProvisionError::LandingPage {
                    group_id: group.id.clone(),
                    source,
                })?
            }
        };

        info!(
            "Updating landing page of {} ({} new link(s))",
            group.id,
            links.len()
        );
        self.post_group(Group::new(group.id.clone()).with_web(web))
            .await
            .map(Some)
    }
}

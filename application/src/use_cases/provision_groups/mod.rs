//! Provision Groups use case
//!
//! Creates the permission-bearing groups of a venue on the remote store:
//! the path groups leading to the venue, the venue group itself, the
//! committee role groups, per-submission committee groups and recruitment
//! pools. Every operation is create-if-absent, so re-running a provisioning
//! step is the recovery path after a partial failure.

mod paper_groups;
mod path_groups;
pub mod types;
pub mod writer;

pub use types::{
    BatchReport, GroupSummary, PaperFailure, ProvisionError, ProvisionVenueInput,
    ProvisionVenueOutput, Provisioned, VenueGroupOutput,
};
pub use writer::GroupWriter;

use crate::config::ProvisionParams;
use crate::ports::group_store::GroupStore;
use crate::ports::progress::{NoProgress, ProvisionProgressNotifier, ProvisionStep};
use crate::ports::provision_logger::{NoProvisionLogger, ProvisionLogger};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::info;
use venue_domain::constants::{EVERYONE, HOST_GROUP, SUPER_USER, VENUES_GROUP};
use venue_domain::group::group_id;
use venue_domain::webfield::templates;
use venue_domain::{DomainError, Group, GroupEdit, Submission, Venue};

/// Use case provisioning the groups of one venue
pub struct GroupProvisioner<S: GroupStore + 'static> {
    writer: GroupWriter<S>,
    params: ProvisionParams,
}

impl<S: GroupStore + 'static> GroupProvisioner<S> {
    pub fn new(store: Arc<S>, venue: Venue) -> Self {
        Self {
            writer: GroupWriter::new(store, Arc::new(venue), Arc::new(NoProvisionLogger)),
            params: ProvisionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ProvisionParams) -> Self {
        self.params = params;
        self
    }

    /// Record every posted edit in an audit log
    pub fn with_logger(mut self, logger: Arc<dyn ProvisionLogger>) -> Self {
        self.writer = self.writer.with_logger(logger);
        self
    }

    pub fn venue(&self) -> &Venue {
        self.writer.venue()
    }

    pub fn params(&self) -> &ProvisionParams {
        &self.params
    }

    // ==================== Path groups ====================

    /// Ensure a group for every prefix of the venue id.
    pub async fn ensure_path_groups(&self) -> Result<Vec<Provisioned>, ProvisionError> {
        self.writer.ensure_path_groups(&self.venue().id).await
    }

    /// Link `group`'s landing page to its direct children.
    pub async fn update_landing_page(
        &self,
        group: &Group,
        parent: Option<&Group>,
    ) -> Result<Option<Group>, ProvisionError> {
        self.writer.update_landing_page(group, parent).await
    }

    /// Create the venue group and everything above it.
    ///
    /// Path groups are ensured first and every ancestor gets a landing page
    /// pointing at its children. The venue group itself is always re-posted
    /// with the homepage, keeping its current members, and then receives
    /// the venue settings as content.
    pub async fn create_venue_group(
        &self,
        progress: &dyn ProvisionProgressNotifier,
    ) -> Result<VenueGroupOutput, ProvisionError> {
        let venue = self.venue();
        let venue_id = venue.id.clone();

        let path_groups = self.ensure_path_groups().await?;
        progress.on_step_start(ProvisionStep::PathGroups, path_groups.len());
        for provisioned in &path_groups {
            progress.on_item_complete(ProvisionStep::PathGroups, &provisioned.group().id, true);
        }
        progress.on_step_complete(ProvisionStep::PathGroups);

        let ancestors: Vec<&Group> = path_groups
            .iter()
            .map(Provisioned::group)
            .take(path_groups.len().saturating_sub(1))
            .collect();

        progress.on_step_start(ProvisionStep::VenueGroup, ancestors.len() + 1);

        let mut landing_pages_updated = Vec::new();
        for (index, group) in ancestors.iter().enumerate() {
            let parent = index.checked_sub(1).map(|i| ancestors[i]);
            if let Some(updated) = self.writer.update_landing_page(group, parent).await? {
                landing_pages_updated.push(updated.id);
            }
            progress.on_item_complete(ProvisionStep::VenueGroup, &group.id, true);
        }

        let members = path_groups
            .last()
            .map(|venue_group| venue_group.group().members().to_vec())
            .unwrap_or_default();
        self.writer
            .post_group(
                Group::new(venue_id.clone())
                    .with_readers([EVERYONE])
                    .with_writers([venue_id.as_str()])
                    .with_signatures([SUPER_USER])
                    .with_signatories([venue_id.as_str()])
                    .with_members(members)
                    .with_host(venue_id.clone())
                    .with_web(templates::VENUE_HOMEPAGE),
            )
            .await?;
        info!("Posted venue group {}", venue_id);

        self.writer
            .add_members(VENUES_GROUP, std::slice::from_ref(&venue_id))
            .await?;
        let host_root = host_root(&path_groups);
        self.writer.add_members(HOST_GROUP, &[host_root]).await?;

        self.writer
            .post_edit(GroupEdit {
                invitation: venue.meta_invitation_id(),
                readers: vec![venue_id.clone()],
                writers: vec![venue_id.clone()],
                signatures: vec![venue_id.clone()],
                group: Group::new(venue_id.clone()).with_content(venue.group_content()),
            })
            .await?;

        let venue_group = self
            .writer
            .store()
            .get_group(&venue_id)
            .await?
            .ok_or_else(|| ProvisionError::MissingAfterPost(venue_id.clone()))?;
        progress.on_item_complete(ProvisionStep::VenueGroup, &venue_id, true);
        progress.on_step_complete(ProvisionStep::VenueGroup);

        Ok(VenueGroupOutput {
            path_groups,
            landing_pages_updated,
            venue_group,
        })
    }

    // ==================== Role groups ====================

    /// Create the editors-in-chief group.
    ///
    /// When the group is new it is also added as a member of the venue
    /// group, which grants it every venue permission.
    pub async fn create_editors_in_chief_group(
        &self,
        members: Vec<String>,
    ) -> Result<Provisioned, ProvisionError> {
        let venue = self.venue();
        let eic_id = venue.editors_in_chief_id();

        let provisioned = self
            .writer
            .ensure_group(
                Group::new(eic_id.clone())
                    .with_readers(venue.editors_in_chief_group_readers())
                    .with_writers([venue.id.clone(), eic_id.clone()])
                    .with_signatures([venue.id.clone()])
                    .with_signatories([eic_id.clone(), venue.id.clone()])
                    .with_members(members)
                    .with_web(templates::EDITORS_IN_CHIEF),
            )
            .await?;

        if provisioned.is_created() {
            self.writer.add_members(&venue.id, &[eic_id]).await?;
        }
        Ok(provisioned)
    }

    /// Create the authors group and the accepted authors group.
    pub async fn create_authors_group(&self) -> Result<Vec<Provisioned>, ProvisionError> {
        let venue = self.venue();
        let authors_id = venue.authors_id(None);
        let accepted_id = venue.authors_accepted_id();

        let authors = self
            .writer
            .ensure_group(
                self.role_group(authors_id, venue.authors_group_readers(), Vec::new())
                    .with_web(templates::AUTHORS),
            )
            .await?;
        let accepted = self
            .writer
            .ensure_group(self.role_group(
                accepted_id.clone(),
                [venue.id.clone(), accepted_id],
                Vec::new(),
            ))
            .await?;

        Ok(vec![authors, accepted])
    }

    pub async fn create_reviewers_group(
        &self,
        members: Vec<String>,
    ) -> Result<Provisioned, ProvisionError> {
        let venue = self.venue();
        self.writer
            .ensure_group(
                self.role_group(
                    venue.reviewers_id(None),
                    venue.reviewers_group_readers(),
                    members,
                )
                .with_web(templates::REVIEWERS),
            )
            .await
    }

    /// Create the action editors group; fails when the role is disabled.
    pub async fn create_action_editors_group(
        &self,
        members: Vec<String>,
    ) -> Result<Provisioned, ProvisionError> {
        let venue = self.venue();
        if !venue.use_action_editors {
            return Err(DomainError::RoleDisabled(venue.roles.action_editors.clone()).into());
        }
        self.writer
            .ensure_group(
                self.role_group(
                    venue.action_editors_id(None),
                    venue.action_editors_group_readers(),
                    members,
                )
                .with_web(templates::ACTION_EDITORS),
            )
            .await
    }

    /// Create the senior action editors group; fails when the role is disabled.
    pub async fn create_senior_action_editors_group(
        &self,
        members: Vec<String>,
    ) -> Result<Provisioned, ProvisionError> {
        let venue = self.venue();
        if !venue.use_senior_action_editors {
            return Err(
                DomainError::RoleDisabled(venue.roles.senior_action_editors.clone()).into(),
            );
        }
        self.writer
            .ensure_group(
                self.role_group(
                    venue.senior_action_editors_id(None),
                    venue.senior_action_editors_group_readers(),
                    members,
                )
                .with_web(templates::ACTION_EDITORS),
            )
            .await
    }

    /// Role group written and signed by the venue alone
    fn role_group<I: IntoIterator<Item = String>>(
        &self,
        id: String,
        readers: I,
        members: Vec<String>,
    ) -> Group {
        let venue_id = self.venue().id.as_str();
        Group::new(id)
            .with_readers(readers)
            .with_writers([venue_id])
            .with_signatures([venue_id])
            .with_signatories([venue_id])
            .with_members(members)
    }

    // ==================== Paper groups ====================

    /// Ensure committee groups for every submission.
    ///
    /// See [`BatchReport`] for how partial failures are reported.
    pub async fn create_paper_committee_groups(
        &self,
        submissions: &[Submission],
        overwrite: bool,
        progress: &dyn ProvisionProgressNotifier,
    ) -> Result<BatchReport, ProvisionError> {
        self.writer
            .create_paper_committee_groups(
                submissions,
                overwrite,
                self.params.max_concurrency,
                progress,
            )
            .await
    }

    // ==================== Recruitment ====================

    /// Create the committee, declined and invited pools of a committee.
    pub async fn create_recruitment_groups(
        &self,
        committee_name: &str,
    ) -> Result<Vec<Provisioned>, ProvisionError> {
        let venue = self.venue();
        let venue_id = venue.id.clone();
        let eic_id = venue.editors_in_chief_id();

        let ids = [
            venue.committee_id(committee_name),
            venue.committee_declined_id(committee_name),
            venue.committee_invited_id(committee_name),
        ];
        let groups = ids.into_iter().map(|id| {
            Group::new(id.clone())
                .with_readers([venue_id.clone(), id.clone()])
                .with_writers([venue_id.clone(), eic_id.clone()])
                .with_signatures([venue_id.clone()])
                .with_signatories([venue_id.clone(), id])
                .with_members(Vec::<String>::new())
        });

        try_join_all(groups.map(|group| self.writer.ensure_group(group))).await
    }

    // ==================== Full run ====================

    /// Provision a venue end to end with default (no-op) progress
    pub async fn provision_venue(
        &self,
        input: ProvisionVenueInput,
    ) -> Result<ProvisionVenueOutput, ProvisionError> {
        self.provision_venue_with_progress(input, &NoProgress).await
    }

    /// Provision the venue group, every enabled role group and, when
    /// requested, the recruitment pools of every enabled committee.
    pub async fn provision_venue_with_progress(
        &self,
        input: ProvisionVenueInput,
        progress: &dyn ProvisionProgressNotifier,
    ) -> Result<ProvisionVenueOutput, ProvisionError> {
        let venue = self.venue();
        info!("Provisioning venue {}", venue.id);

        let venue_groups = self.create_venue_group(progress).await?;

        let role_count = 4
            + usize::from(venue.use_action_editors)
            + usize::from(venue.use_senior_action_editors);
        progress.on_step_start(ProvisionStep::RoleGroups, role_count);

        let mut role_groups = Vec::new();
        let eic = self
            .create_editors_in_chief_group(input.editors_in_chief)
            .await?;
        notify_all(progress, ProvisionStep::RoleGroups, std::slice::from_ref(&eic));
        role_groups.push(eic);

        let authors = self.create_authors_group().await?;
        notify_all(progress, ProvisionStep::RoleGroups, &authors);
        role_groups.extend(authors);

        let reviewers = self.create_reviewers_group(Vec::new()).await?;
        notify_all(progress, ProvisionStep::RoleGroups, std::slice::from_ref(&reviewers));
        role_groups.push(reviewers);

        if venue.use_action_editors {
            let action_editors = self.create_action_editors_group(Vec::new()).await?;
            notify_all(
                progress,
                ProvisionStep::RoleGroups,
                std::slice::from_ref(&action_editors),
            );
            role_groups.push(action_editors);
        }
        if venue.use_senior_action_editors {
            let senior_action_editors = self.create_senior_action_editors_group(Vec::new()).await?;
            notify_all(
                progress,
                ProvisionStep::RoleGroups,
                std::slice::from_ref(&senior_action_editors),
            );
            role_groups.push(senior_action_editors);
        }
        progress.on_step_complete(ProvisionStep::RoleGroups);

        let mut recruitment_groups = Vec::new();
        if input.recruitment {
            let committees = venue.committee_names();
            progress.on_step_start(ProvisionStep::Recruitment, committees.len());
            for committee in committees {
                let pools = self.create_recruitment_groups(&committee).await?;
                progress.on_item_complete(ProvisionStep::Recruitment, &committee, true);
                recruitment_groups.extend(pools);
            }
            progress.on_step_complete(ProvisionStep::Recruitment);
        }

        let output = ProvisionVenueOutput {
            venue_id: venue.id.clone(),
            path_groups: venue_groups.path_groups.iter().map(Provisioned::summary).collect(),
            landing_pages_updated: venue_groups.landing_pages_updated,
            role_groups: role_groups.iter().map(Provisioned::summary).collect(),
            recruitment_groups: recruitment_groups.iter().map(Provisioned::summary).collect(),
        };
        info!(
            "Venue {} provisioned: {} group(s) created",
            output.venue_id,
            output.created_count()
        );
        Ok(output)
    }
}

fn notify_all(progress: &dyn ProvisionProgressNotifier, step: ProvisionStep, items: &[Provisioned]) {
    for item in items {
        progress.on_item_complete(step, &item.group().id, true);
    }
}

/// Organisation group registered as a host.
///
/// The first path group, unless its id is all lowercase (a domain such as
/// `auai.org`), in which case the second one.
fn host_root(path_groups: &[Provisioned]) -> String {
    let ids: Vec<&str> = path_groups.iter().map(|p| p.group().id.as_str()).collect();
    match ids.as_slice() {
        [root, second, ..] if group_id::is_lowercase(root) => second.to_string(),
        [root, ..] => root.to_string(),
        [] => String::new(),
    }
}

//! Per-submission committee groups.
//!
//! Every submission gets a reviewers group, a reviewers-submitted group and,
//! when the roles are enabled, action editor and senior action editor
//! groups. Submissions are independent, so they are processed by a bounded
//! pool of tasks sharing a read-only snapshot of the existing groups.

use super::types::{BatchReport, PaperFailure, ProvisionError};
use super::writer::GroupWriter;
use crate::ports::group_store::{GroupQuery, GroupStore};
use crate::ports::progress::{ProvisionProgressNotifier, ProvisionStep};
use crate::ports::provision_logger::ProvisionEvent;
use serde_json::json;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};
use venue_domain::{Group, Submission};

/// Groups that existed under the submission namespace before the batch
type ExistingGroups = Arc<HashMap<String, Group>>;

/// Paper number and the ids posted for it
type PaperOutcome = (u64, Result<Vec<String>, ProvisionError>);

impl<S: GroupStore + 'static> GroupWriter<S> {
    /// Post one paper group if it is absent or `overwrite` is set.
    ///
    /// Members of an existing group are carried over into the new payload.
    async fn post_paper_group(
        &self,
        existing: &HashMap<String, Group>,
        overwrite: bool,
        group: Group,
    ) -> Result<Option<String>, ProvisionError> {
        let current = existing.get(&group.id);
        if current.is_some() && !overwrite {
            return Ok(None);
        }
        let members = current.map(|g| g.members().to_vec()).unwrap_or_default();
        let posted = self.post_group(group.with_members(members)).await?;
        Ok(Some(posted.id))
    }

    /// Ensure every committee group of one submission.
    ///
    /// Returns the ids of the groups that were posted.
    async fn create_paper_committee_group(
        &self,
        existing: &HashMap<String, Group>,
        overwrite: bool,
        number: u64,
    ) -> Result<Vec<String>, ProvisionError> {
        let venue = self.venue();
        let venue_id = venue.id.clone();
        let authors_id = venue.authors_id(Some(number));
        let mut groups = Vec::with_capacity(4);

        groups.push(
            Group::new(venue.reviewers_id(Some(number)))
                .with_readers(venue.reviewer_paper_group_readers(number))
                .with_nonreaders([authors_id.clone()])
                .with_deanonymizers(venue.reviewer_identity_readers_for(number))
                .with_writers(venue.reviewer_paper_group_writers(number))
                .with_signatures([venue_id.clone()])
                .with_signatories([venue_id.clone()])
                .with_anonids(true),
        );

        groups.push(
            Group::new(venue.reviewers_submitted_id(number))
                .with_readers(venue.reviewers_submitted_group_readers(number))
                .with_writers([venue_id.clone()])
                .with_signatures([venue_id.clone()])
                .with_signatories([venue_id.clone()]),
        );

        if venue.use_action_editors {
            groups.push(
                Group::new(venue.action_editors_id(Some(number)))
                    .with_readers(venue.action_editor_paper_group_readers(number))
                    .with_nonreaders([authors_id.clone()])
                    .with_deanonymizers(venue.action_editor_identity_readers_for(number))
                    .with_writers([venue_id.clone()])
                    .with_signatures([venue_id.clone()])
                    .with_signatories([venue_id.clone()])
                    .with_anonids(true),
            );
        }

        if venue.use_senior_action_editors {
            let senior_action_editors_id = venue.senior_action_editors_id(Some(number));
            groups.push(
                Group::new(senior_action_editors_id.clone())
                    .with_readers(venue.senior_action_editor_paper_group_readers(number))
                    .with_nonreaders([authors_id])
                    .with_writers([venue_id.clone()])
                    .with_signatures([venue_id.clone()])
                    .with_signatories([venue_id, senior_action_editors_id]),
            );
        }

        let mut posted = Vec::new();
        for group in groups {
            if let Some(id) = self.post_paper_group(existing, overwrite, group).await? {
                posted.push(id);
            }
        }
        Ok(posted)
    }

    /// Ensure committee groups for every submission.
    ///
    /// Existing groups under the submission namespace are fetched once up
    /// front. At most `max_concurrency` tasks run at once and results are
    /// collected as they finish, so progress advances during dispatch.
    /// A failing submission is recorded in the report and never stops the
    /// others. Only a failure of the initial bulk fetch aborts the batch.
    pub async fn create_paper_committee_groups(
        &self,
        submissions: &[Submission],
        overwrite: bool,
        max_concurrency: usize,
        progress: &dyn ProvisionProgressNotifier,
    ) -> Result<BatchReport, ProvisionError> {
        let prefix = self.venue().submission_prefix();
        let existing: ExistingGroups = Arc::new(
            self.store()
                .list_groups(&GroupQuery::Prefix(prefix.clone()))
                .await?
                .into_iter()
                .map(|g| (g.id.clone(), g))
                .collect(),
        );
        info!(
            "Provisioning committee groups for {} submission(s) ({} existing group(s) under {})",
            submissions.len(),
            existing.len(),
            prefix
        );

        let distinct: HashSet<u64> = submissions.iter().map(|s| s.number).collect();
        progress.on_step_start(ProvisionStep::PaperGroups, distinct.len());

        let pool_size = max_concurrency.max(1);
        let mut join_set: JoinSet<PaperOutcome> = JoinSet::new();
        let mut seen: HashSet<u64> = HashSet::new();
        let mut pending: BTreeSet<u64> = BTreeSet::new();
        let mut report = BatchReport::default();

        for submission in submissions {
            let number = submission.number;
            if !seen.insert(number) {
                debug!("Skipping duplicate submission {}", number);
                continue;
            }

            // Pool full: collect one result before dispatching the next
            while join_set.len() >= pool_size {
                let Some(joined) = join_set.join_next().await else {
                    break;
                };
                self.record(joined, &mut pending, &mut report, progress);
            }

            let writer = self.clone();
            let existing = Arc::clone(&existing);
            pending.insert(number);
            join_set.spawn(async move {
                let result = writer
                    .create_paper_committee_group(&existing, overwrite, number)
                    .await;
                (number, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            self.record(joined, &mut pending, &mut report, progress);
        }

        // Tasks that panicked never reported back
        for number in pending {
            progress.on_item_complete(
                ProvisionStep::PaperGroups,
                &format!("Submission {}", number),
                false,
            );
            report.failed.push(PaperFailure {
                number,
                error: "worker task aborted".to_string(),
            });
        }

        progress.on_step_complete(ProvisionStep::PaperGroups);

        let report = report.finish();
        info!(
            "Committee groups: {} succeeded, {} failed, {} posted",
            report.succeeded.len(),
            report.failed.len(),
            report.posted.len()
        );
        Ok(report)
    }

    /// Fold one finished task into the report and notify progress.
    fn record(
        &self,
        joined: Result<PaperOutcome, JoinError>,
        pending: &mut BTreeSet<u64>,
        report: &mut BatchReport,
        progress: &dyn ProvisionProgressNotifier,
    ) {
        match joined {
            Ok((number, Ok(posted))) => {
                pending.remove(&number);
                debug!("Submission {}: {} group(s) posted", number, posted.len());
                progress.on_item_complete(
                    ProvisionStep::PaperGroups,
                    &format!("Submission {}", number),
                    true,
                );
                report.succeeded.push(number);
                report.posted.extend(posted);
            }
            Ok((number, Err(e))) => {
                pending.remove(&number);
                warn!("Submission {} failed: {}", number, e);
                progress.on_item_complete(
                    ProvisionStep::PaperGroups,
                    &format!("Submission {}", number),
                    false,
                );
                self.log(ProvisionEvent::new(
                    "paper_failed",
                    json!({ "number": number, "error": e.to_string() }),
                ));
                report.failed.push(PaperFailure {
                    number,
                    error: e.to_string(),
                });
            }
            // The number of a panicked task stays in `pending`
            Err(e) => warn!("Task join error: {}", e),
        }
    }
}

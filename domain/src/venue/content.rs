//! Settings published on the venue root group.
//!
//! The platform's venue pages read these `{ "value": ... }` entries to find
//! the venue's invitations and committee groups.

use super::entities::Venue;
use serde_json::{Map, Value, json};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn insert(content: &mut Map<String, Value>, key: &str, value: impl Into<Value>) {
    content.insert(key.to_string(), json!({ "value": value.into() }));
}

impl Venue {
    /// Build the content map stored on the venue root group
    pub fn group_content(&self) -> Map<String, Value> {
        let mut content = Map::new();
        let stage = &self.submission_stage;
        let reviewers_id = self.reviewers_id(None);

        insert(&mut content, "submission_id", self.submission_id());
        insert(&mut content, "submission_name", stage.name.clone());
        insert(&mut content, "submission_venue_id", self.submission_venue_id());
        insert(&mut content, "withdrawn_venue_id", self.withdrawn_submission_venue_id());
        insert(
            &mut content,
            "desk_rejected_venue_id",
            self.desk_rejected_submission_venue_id(),
        );
        insert(&mut content, "public_submissions", yes_no(stage.public));
        insert(
            &mut content,
            "public_withdrawn_submissions",
            yes_no(stage.withdrawn_submission_public),
        );
        insert(
            &mut content,
            "public_desk_rejected_submissions",
            yes_no(stage.desk_rejected_submission_public),
        );
        insert(&mut content, "title", self.name.clone().unwrap_or_default());
        insert(&mut content, "subtitle", self.short_name.clone().unwrap_or_default());
        insert(&mut content, "website", self.website.clone().unwrap_or_default());
        insert(&mut content, "contact", self.contact.clone().unwrap_or_default());
        insert(&mut content, "editors_in_chief_id", self.editors_in_chief_id());
        insert(&mut content, "reviewers_id", reviewers_id.clone());
        insert(
            &mut content,
            "reviewers_custom_max_papers_id",
            self.custom_max_papers_id(&reviewers_id),
        );
        insert(
            &mut content,
            "reviewers_affinity_score_id",
            self.affinity_score_id(&reviewers_id),
        );
        insert(
            &mut content,
            "reviewers_conflict_id",
            self.conflict_score_id(&reviewers_id),
        );
        insert(
            &mut content,
            "reviewers_recruitment_id",
            self.recruitment_id(&reviewers_id),
        );
        insert(&mut content, "authors_id", self.authors_id(None));

        if self.use_action_editors {
            insert(&mut content, "action_editors_id", self.action_editors_id(None));
        }
        if self.use_senior_action_editors {
            insert(
                &mut content,
                "senior_action_editors_id",
                self.senior_action_editors_id(None),
            );
        }
        if let Some(bid) = self.bid_stages.first() {
            insert(&mut content, "bid_name", bid.name.clone());
        }
        if let Some(review) = &self.review_stage {
            insert(&mut content, "review_name", review.name.clone());
            insert(&mut content, "review_rating", review.rating_field_name.clone());
            insert(
                &mut content,
                "review_confidence",
                review.confidence_field_name.clone(),
            );
        }
        if let Some(meta_review) = &self.meta_review_stage {
            insert(&mut content, "meta_review_name", meta_review.name.clone());
        }
        if let Some(decision) = &self.decision_stage {
            insert(&mut content, "decision_name", decision.name.clone());
        }
        if let Some(request_form_id) = &self.request_form_id {
            insert(&mut content, "request_form_id", request_form_id.clone());
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::stages::{BidStage, ReviewStage};

    #[test]
    fn test_minimal_venue_content() {
        let venue = Venue::new("ARR").unwrap();
        let content = venue.group_content();

        assert_eq!(content["submission_id"], json!({"value": "ARR/-/Submission"}));
        assert_eq!(content["public_submissions"], json!({"value": "No"}));
        assert_eq!(content["title"], json!({"value": ""}));
        assert_eq!(
            content["reviewers_recruitment_id"],
            json!({"value": "ARR/Reviewers/-/Recruitment"})
        );
        assert!(!content.contains_key("action_editors_id"));
        assert!(!content.contains_key("review_name"));
        assert!(!content.contains_key("bid_name"));
    }

    #[test]
    fn test_optional_entries_follow_configuration() {
        let mut venue = Venue::new("ARR").unwrap().with_action_editors(true);
        venue.name = Some("ACL Rolling Review".to_string());
        venue.submission_stage.public = true;
        venue.review_stage = Some(ReviewStage::default());
        venue.bid_stages = vec![BidStage::default()];
        venue.request_form_id = Some("abc123".to_string());

        let content = venue.group_content();
        assert_eq!(content["title"], json!({"value": "ACL Rolling Review"}));
        assert_eq!(content["public_submissions"], json!({"value": "Yes"}));
        assert_eq!(content["action_editors_id"], json!({"value": "ARR/Area_Chairs"}));
        assert_eq!(content["review_rating"], json!({"value": "rating"}));
        assert_eq!(content["bid_name"], json!({"value": "Bid"}));
        assert_eq!(content["request_form_id"], json!({"value": "abc123"}));
        assert!(!content.contains_key("senior_action_editors_id"));
    }
}

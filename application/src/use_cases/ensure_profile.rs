//! Ensure Profile use case
//!
//! Creates a user profile for an email address that has none, together
//! with the tilde group and email group the platform expects for it.

use crate::ports::group_store::StoreError;
use crate::ports::profile_store::ProfileStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use venue_domain::constants::ROOT_USER;
use venue_domain::profile::is_first_username;
use venue_domain::{Group, Profile};

/// Errors that can occur while creating a profile
#[derive(Error, Debug)]
pub enum EnsureProfileError {
    #[error("There is already a profile with this {field}: {value}")]
    AlreadyExists { field: &'static str, value: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the EnsureProfile use case
#[derive(Debug, Clone)]
pub struct EnsureProfileInput {
    pub email: String,
    pub first: String,
    pub last: String,
    pub middle: Option<String>,
}

impl EnsureProfileInput {
    pub fn new(
        email: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first: first.into(),
            last: last.into(),
            middle: None,
        }
    }

    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }

    fn full_name(&self) -> String {
        match &self.middle {
            Some(middle) => format!("{} {} {}", self.first, middle, self.last),
            None => format!("{} {}", self.first, self.last),
        }
    }
}

/// Use case creating a profile unless one exists
pub struct EnsureProfileUseCase<P: ProfileStore + 'static> {
    store: Arc<P>,
}

impl<P: ProfileStore + 'static> EnsureProfileUseCase<P> {
    pub fn new(store: Arc<P>) -> Self {
        Self { store }
    }

    /// Create the profile.
    ///
    /// Fails when the email already has a profile, or when the name's first
    /// tilde username is taken by someone else. Nothing is posted in either
    /// case.
    pub async fn execute(&self, input: EnsureProfileInput) -> Result<Profile, EnsureProfileError> {
        if self.store.get_profile(&input.email).await?.is_some() {
            return Err(EnsureProfileError::AlreadyExists {
                field: "email",
                value: input.email,
            });
        }

        let tilde_id = self
            .store
            .tilde_username(&input.first, &input.last, input.middle.as_deref())
            .await?;
        debug!("Next username for {}: {}", input.full_name(), tilde_id);

        if !is_first_username(&tilde_id, &input.last) {
            return Err(EnsureProfileError::AlreadyExists {
                field: "name",
                value: input.full_name(),
            });
        }

        self.store
            .post_group(
                Group::new(tilde_id.clone())
                    .with_readers([tilde_id.as_str()])
                    .with_writers([ROOT_USER])
                    .with_signatures([ROOT_USER])
                    .with_signatories([tilde_id.as_str()])
                    .with_members([input.email.as_str()]),
            )
            .await?;
        self.store
            .post_group(
                Group::new(input.email.clone())
                    .with_readers([input.email.as_str()])
                    .with_writers([ROOT_USER])
                    .with_signatures([ROOT_USER])
                    .with_signatories([input.email.as_str()])
                    .with_members([tilde_id.as_str()]),
            )
            .await?;

        let profile = self
            .store
            .post_profile(Profile::new_user(
                &tilde_id,
                &input.email,
                &input.first,
                input.middle.as_deref(),
                &input.last,
            ))
            .await?;
        info!("Created profile {} for {}", profile.id, input.email);
        Ok(profile)
    }
}

//! Submission value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A submission to a venue, identified by its paper number (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    /// Paper number, starting at 1
    pub number: u64,
    /// Remote note id, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Submission {
    pub fn new(number: u64) -> Self {
        Self { number, id: None }
    }

    /// Parse a comma-separated list of paper numbers and ranges.
    ///
    /// Accepts `1,2,5-7`. Paper numbers start at 1.
    pub fn parse_list(input: &str) -> Result<Vec<Submission>, DomainError> {
        let mut submissions = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let invalid = || DomainError::InvalidSubmissionNumber(part.to_string());
            match part.split_once('-') {
                Some((start, end)) => {
                    let start: u64 = start.trim().parse().map_err(|_| invalid())?;
                    let end: u64 = end.trim().parse().map_err(|_| invalid())?;
                    if start == 0 || end < start {
                        return Err(invalid());
                    }
                    submissions.extend((start..=end).map(Submission::new));
                }
                None => {
                    let number: u64 = part.parse().map_err(|_| invalid())?;
                    if number == 0 {
                        return Err(invalid());
                    }
                    submissions.push(Submission::new(number));
                }
            }
        }
        Ok(submissions)
    }

    /// Submissions numbered `1..=count`
    pub fn first_n(count: u64) -> Vec<Submission> {
        (1..=count).map(Submission::new).collect()
    }
}

//! User profiles of the remote platform.

use serde::{Deserialize, Serialize};

/// A name entry on a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileName {
    pub first: String,
    #[serde(default)]
    pub middle: Option<String>,
    pub last: String,
    /// Tilde id, e.g. `~Ada_Lovelace1`
    #[serde(default)]
    pub username: Option<String>,
}

/// Profile content as posted to the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileContent {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub preferred_email: Option<String>,
    #[serde(default)]
    pub names: Vec<ProfileName>,
}

/// A user profile (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Tilde id of the profile
    pub id: String,
    #[serde(default)]
    pub content: ProfileContent,
}

impl Profile {
    /// Build the profile of a new user with a single email and name.
    pub fn new_user(
        tilde_id: &str,
        email: &str,
        first: &str,
        middle: Option<&str>,
        last: &str,
    ) -> Self {
        Self {
            id: tilde_id.to_string(),
            content: ProfileContent {
                emails: vec![email.to_string()],
                preferred_email: Some(email.to_string()),
                names: vec![ProfileName {
                    first: first.to_string(),
                    middle: middle.map(str::to_string),
                    last: last.to_string(),
                    username: Some(tilde_id.to_string()),
                }],
            },
        }
    }
}

/// Whether a tilde username is the first one issued for a last name.
///
/// The platform suffixes usernames with a counter; `~Ada_Lovelace1` is the
/// first, `~Ada_Lovelace2` means another profile already took the name.
pub fn is_first_username(tilde_id: &str, last: &str) -> bool {
    tilde_id.ends_with(&format!("{}1", last.replace(' ', "_")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_profile() {
        let profile = Profile::new_user("~Ada_Lovelace1", "ada@example.org", "Ada", None, "Lovelace");
        assert_eq!(profile.content.emails, vec!["ada@example.org"]);
        assert_eq!(
            profile.content.names[0].username.as_deref(),
            Some("~Ada_Lovelace1")
        );
    }

    #[test]
    fn test_is_first_username() {
        assert!(is_first_username("~Ada_Lovelace1", "Lovelace"));
        assert!(!is_first_username("~Ada_Lovelace2", "Lovelace"));
        assert!(is_first_username("~Jan_Van_Dam1", "Van Dam"));
    }
}

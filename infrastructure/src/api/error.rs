//! Error bodies returned by the platform API

use reqwest::StatusCode;
use serde::Deserialize;
use venue_application::StoreError;

/// Error name the platform uses for missing resources
const NOT_FOUND_ERROR: &str = "NotFoundError";

/// JSON error body: `{"name": ..., "message": ..., "status": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ApiErrorBody {
    pub fn is_not_found(&self) -> bool {
        self.name == NOT_FOUND_ERROR || self.status == Some(404)
    }
}

/// Map a failed response to a store error.
///
/// Bodies that are not the platform's JSON error shape are reported with
/// the HTTP status and the raw text.
pub fn from_response(status: StatusCode, body: &str) -> StoreError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) if error.is_not_found() || status == StatusCode::NOT_FOUND => {
            StoreError::NotFound(error.message)
        }
        Ok(error) => StoreError::Remote {
            name: error.name,
            message: error.message,
            status: error.status.unwrap_or(status.as_u16()),
        },
        Err(_) if status == StatusCode::NOT_FOUND => StoreError::NotFound(body.to_string()),
        Err(_) => StoreError::Remote {
            name: status
                .canonical_reason()
                .unwrap_or("HttpError")
                .to_string(),
            message: body.to_string(),
            status: status.as_u16(),
        },
    }
}

pub fn transport(error: reqwest::Error) -> StoreError {
    if error.is_decode() {
        StoreError::Decode(error.to_string())
    } else {
        StoreError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_by_name() {
        let error = from_response(
            StatusCode::BAD_REQUEST,
            r#"{"name": "NotFoundError", "message": "Group Not Found: org", "status": 400}"#,
        );
        assert_eq!(error, StoreError::NotFound("Group Not Found: org".to_string()));
    }

    #[test]
    fn test_not_found_by_status() {
        let error = from_response(StatusCode::NOT_FOUND, "no such route");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_remote_error_keeps_body_fields() {
        let error = from_response(
            StatusCode::FORBIDDEN,
            r#"{"name": "ForbiddenError", "message": "Signature not allowed", "status": 403}"#,
        );
        assert_eq!(
            error,
            StoreError::Remote {
                name: "ForbiddenError".to_string(),
                message: "Signature not allowed".to_string(),
                status: 403,
            }
        );
    }

    #[test]
    fn test_plain_text_error() {
        let error = from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(
            error,
            StoreError::Remote {
                name: "Bad Gateway".to_string(),
                message: "upstream down".to_string(),
                status: 502,
            }
        );
    }
}

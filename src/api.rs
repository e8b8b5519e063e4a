//! Backend endpoint contract.
//!
//! - `GET /activities`
//! - `POST /activities/{name}/signup?email={email}`
//! - `DELETE /activities/{name}/unregister?email={email}`
//!
//! Mutations answer `{"message": ...}` on 2xx and `{"detail": ...}` otherwise.
//! Transport lives behind [`ActivityApi`]; this module owns the URLs and the
//! interpretation of response bodies so both are testable without a browser.

#![allow(async_fn_in_trait)]

use serde::Deserialize;

use crate::activity::Activities;
use crate::error::{BoardError, Result};

/// Where the backend lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every endpoint. Empty means same origin.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Config from a build-time override, same origin when unset or blank.
    pub fn from_build_env(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        self.mutation_url(activity, "signup", email)
    }

    pub fn unregister_url(&self, activity: &str, email: &str) -> String {
        self.mutation_url(activity, "unregister", email)
    }

    fn mutation_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }
}

/// The three backend calls the board needs.
pub trait ActivityApi {
    async fn fetch_activities(&self) -> Result<Activities>;

    /// Returns the backend's confirmation message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String>;

    /// Returns the backend's confirmation message.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Interpret a `GET /activities` response.
pub fn parse_activities_response(status: u16, body: &str) -> Result<Activities> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Activities::from_json(body)
}

/// Interpret a signup/unregister response.
///
/// 2xx yields the `message` field. A non-2xx JSON body is
/// [`BoardError::Rejected`] carrying its `detail`; a non-JSON one is
/// [`BoardError::Decode`].
pub fn parse_mutation_response(status: u16, body: &str) -> Result<String> {
    if is_success(status) {
        let parsed: MessageBody = serde_json::from_str(body)?;
        Ok(parsed.message)
    } else {
        Err(rejection(status, body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error for a non-2xx response. A body that is not JSON at all (a proxy's
/// HTML error page) is [`BoardError::Decode`]; a JSON body becomes
/// [`BoardError::Rejected`] with its `detail`, if any.
fn rejection(status: u16, body: &str) -> BoardError {
    match serde_json::from_str::<DetailBody>(body) {
        Ok(parsed) => BoardError::Rejected {
            status,
            detail: detail_text(parsed),
        },
        Err(e) => BoardError::Decode(format!("status {status}: {e}")),
    }
}

/// `detail` as display text. Validation errors arrive as a JSON array rather
/// than a string; those are shown as compact JSON.
fn detail_text(parsed: DetailBody) -> Option<String> {
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_url() {
        assert_eq!(ApiConfig::default().activities_url(), "/activities");
        assert_eq!(
            ApiConfig::new("https://api.mergington.edu/").activities_url(),
            "https://api.mergington.edu/activities"
        );
    }

    #[test]
    fn test_signup_url_encodes_name_and_email() {
        let config = ApiConfig::default();
        assert_eq!(
            config.signup_url("Chess Club", "a+b@mergington.edu"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40mergington.edu"
        );
    }

    #[test]
    fn test_unregister_url_encodes_slashes() {
        let config = ApiConfig::default();
        assert_eq!(
            config.unregister_url("Art/Design", "x@y.edu"),
            "/activities/Art%2FDesign/unregister?email=x%40y.edu"
        );
    }

    #[test]
    fn test_from_build_env() {
        assert_eq!(ApiConfig::from_build_env(None), ApiConfig::default());
        assert_eq!(ApiConfig::from_build_env(Some("  ")), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_build_env(Some("http://localhost:8000/")).base_url,
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_mutation_success() {
        let body = r#"{"message": "Signed up a@x.edu for Chess Club"}"#;
        assert_eq!(
            parse_mutation_response(200, body).unwrap(),
            "Signed up a@x.edu for Chess Club"
        );
    }

    #[test]
    fn test_mutation_rejected_with_detail() {
        let body = r#"{"detail": "Student is already signed up"}"#;
        let err = parse_mutation_response(400, body).unwrap_err();
        assert_eq!(
            err,
            BoardError::Rejected {
                status: 400,
                detail: Some("Student is already signed up".to_string()),
            }
        );
    }

    #[test]
    fn test_mutation_rejected_without_detail() {
        let err = parse_mutation_response(404, "{}").unwrap_err();
        assert_eq!(
            err,
            BoardError::Rejected {
                status: 404,
                detail: None,
            }
        );
        assert_eq!(
            parse_mutation_response(400, r#"{"detail": ""}"#).unwrap_err().detail(),
            None
        );
    }

    #[test]
    fn test_mutation_rejected_with_non_json_body_is_decode_error() {
        let err = parse_mutation_response(500, "Internal Server Error").unwrap_err();
        assert!(matches!(err, BoardError::Decode(_)));

        let err = parse_mutation_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, BoardError::Decode(_)));
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_mutation_rejected_with_structured_detail() {
        let body = r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#;
        let err = parse_mutation_response(422, body).unwrap_err();
        assert!(err.detail().unwrap().contains("field required"));
    }

    #[test]
    fn test_mutation_success_without_message_is_decode_error() {
        let err = parse_mutation_response(200, "{}").unwrap_err();
        assert!(matches!(err, BoardError::Decode(_)));
    }

    #[test]
    fn test_activities_response() {
        let body = r#"{"Gym Class": {"description": "d", "schedule": "s", "max_participants": 30, "participants": []}}"#;
        let activities = parse_activities_response(200, body).unwrap();
        assert_eq!(activities.len(), 1);

        assert!(matches!(
            parse_activities_response(503, r#"{"detail": "maintenance"}"#).unwrap_err(),
            BoardError::Rejected { status: 503, .. }
        ));
        assert!(matches!(
            parse_activities_response(503, "").unwrap_err(),
            BoardError::Decode(_)
        ));
        assert!(matches!(
            parse_activities_response(200, "not json").unwrap_err(),
            BoardError::Decode(_)
        ));
    }
}

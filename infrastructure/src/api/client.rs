//! HTTP client for the platform API
//!
//! Implements [`GroupStore`] and [`ProfileStore`] over the platform's REST
//! endpoints. Requests carry a bearer token when one is configured.

use super::error::{self, transport};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, trace};
use venue_application::{GroupQuery, GroupStore, ProfileStore, StoreError};
use venue_domain::group::group_id;
use venue_domain::{Group, GroupEdit, Profile};

/// Groups requested per page of a bulk listing
const PAGE_SIZE: usize = 1000;

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Deserialize)]
struct GroupsResponse {
    #[serde(default)]
    groups: Vec<Group>,
}

#[derive(Deserialize)]
struct ProfilesResponse {
    #[serde(default)]
    profiles: Vec<Profile>,
}

#[derive(Deserialize)]
struct UsernameResponse {
    username: String,
}

/// Platform API adapter
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("venue-provision/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and fail on any non-success status
    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self.authorize(request).send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        trace!("Error response ({}): {}", status, body);
        Err(error::from_response(status, &body))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Fetch every page of a group listing
    async fn get_all_groups(&self, key: &str, value: &str) -> Result<Vec<Group>, StoreError> {
        let mut groups = Vec::new();
        let mut offset = 0;
        loop {
            let request = self.client.get(self.url("/groups")).query(&[
                (key, value.to_string()),
                ("limit", PAGE_SIZE.to_string()),
                ("offset", offset.to_string()),
            ]);
            let page: GroupsResponse = self.send_json(request).await?;
            let count = page.groups.len();
            groups.extend(page.groups);
            if count < PAGE_SIZE {
                break;
            }
            offset += count;
        }
        debug!("Listed {} group(s) for {}={}", groups.len(), key, value);
        Ok(groups)
    }
}

#[async_trait]
impl GroupStore for ApiClient {
    async fn get_group(&self, id: &str) -> Result<Option<Group>, StoreError> {
        let request = self.client.get(self.url("/groups")).query(&[("id", id)]);
        match self.send_json::<GroupsResponse>(request).await {
            Ok(response) => Ok(response.groups.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post_group_edit(&self, edit: GroupEdit) -> Result<(), StoreError> {
        let request = self.client.post(self.url("/groups/edits")).json(&edit);
        self.send(request).await?;
        Ok(())
    }

    async fn list_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, StoreError> {
        match query {
            GroupQuery::Prefix(prefix) => self.get_all_groups("prefix", prefix).await,
            GroupQuery::Children(parent) => {
                self.get_all_groups("regex", &group_id::direct_children_pattern(parent))
                    .await
            }
        }
    }

    async fn add_members(&self, group_id: &str, members: &[String]) -> Result<(), StoreError> {
        let request = self
            .client
            .put(self.url("/groups/members"))
            .json(&json!({ "id": group_id, "members": members }));
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for ApiClient {
    async fn get_profile(&self, email_or_id: &str) -> Result<Option<Profile>, StoreError> {
        let key = if email_or_id.contains('@') { "email" } else { "id" };
        let request = self
            .client
            .get(self.url("/profiles"))
            .query(&[(key, email_or_id)]);
        match self.send_json::<ProfilesResponse>(request).await {
            Ok(response) => Ok(response.profiles.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn tilde_username(
        &self,
        first: &str,
        last: &str,
        middle: Option<&str>,
    ) -> Result<String, StoreError> {
        let mut params = vec![("first", first), ("last", last)];
        if let Some(middle) = middle {
            params.push(("middle", middle));
        }
        let request = self.client.get(self.url("/tildeusername")).query(&params);
        let response: UsernameResponse = self.send_json(request).await?;
        Ok(response.username)
    }

    async fn post_group(&self, group: Group) -> Result<(), StoreError> {
        let request = self.client.post(self.url("/groups")).json(&group);
        self.send(request).await?;
        Ok(())
    }

    async fn post_profile(&self, profile: Profile) -> Result<Profile, StoreError> {
        let request = self.client.post(self.url("/profiles")).json(&profile);
        self.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiClientConfig::new(server.uri()).with_token("secret")).unwrap()
    }

    #[tokio::test]
    async fn test_get_group() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(query_param("id", "org/Venue"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "groups": [{"id": "org/Venue", "members": ["~Ada_Lovelace1"]}]
            })))
            .mount(&server)
            .await;

        let group = client(&server).await.get_group("org/Venue").await.unwrap().unwrap();
        assert_eq!(group.id, "org/Venue");
        assert_eq!(group.members(), ["~Ada_Lovelace1"]);
    }

    #[tokio::test]
    async fn test_get_group_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "name": "NotFoundError",
                "message": "Group Not Found: org/Missing",
                "status": 404
            })))
            .mount(&server)
            .await;

        assert!(client(&server).await.get_group("org/Missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_group_other_errors_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "name": "ForbiddenError",
                "message": "Forbidden",
                "status": 403
            })))
            .mount(&server)
            .await;

        let err = client(&server).await.get_group("org").await.unwrap_err();
        assert!(matches!(err, StoreError::Remote { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_post_group_edit_sends_edit_json() {
        let server = MockServer::start().await;
        let edit = GroupEdit {
            invitation: "org/Venue/-/Edit".to_string(),
            readers: vec!["org/Venue".to_string()],
            writers: vec!["org/Venue".to_string()],
            signatures: vec!["org/Venue".to_string()],
            group: Group::new("org/Venue/Reviewers").with_web("page"),
        };
        Mock::given(method("POST"))
            .and(path("/groups/edits"))
            .and(body_json(json!({
                "invitation": "org/Venue/-/Edit",
                "readers": ["org/Venue"],
                "writers": ["org/Venue"],
                "signatures": ["org/Venue"],
                "group": {"id": "org/Venue/Reviewers", "web": "page"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "edit1"})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).await.post_group_edit(edit).await.unwrap();
    }

    #[tokio::test]
    async fn test_children_listing_uses_regex() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(query_param("regex", "org/[^/]+/?$"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "groups": [{"id": "org/A"}, {"id": "org/B"}]
            })))
            .mount(&server)
            .await;

        let groups = client(&server)
            .await
            .list_groups(&GroupQuery::Children("org".to_string()))
            .await
            .unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[tokio::test]
    async fn test_add_members() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/groups/members"))
            .and(body_json(json!({"id": "venues", "members": ["org/Venue"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "venues"})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .await
            .add_members("venues", &["org/Venue".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tilde_username() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tildeusername"))
            .and(query_param("first", "Ada"))
            .and(query_param("last", "Lovelace"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"username": "~Ada_Lovelace1"})),
            )
            .mount(&server)
            .await;

        let username = client(&server)
            .await
            .tilde_username("Ada", "Lovelace", None)
            .await
            .unwrap();
        assert_eq!(username, "~Ada_Lovelace1");
    }

    #[tokio::test]
    async fn test_get_profile_by_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profiles"))
            .and(query_param("email", "ada@example.org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"profiles": []})))
            .mount(&server)
            .await;

        let profile = client(&server)
            .await
            .get_profile("ada@example.org")
            .await
            .unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tildeusername"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .tilde_username("Ada", "Lovelace", None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}

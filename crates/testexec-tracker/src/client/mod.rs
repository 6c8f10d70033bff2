//! Tracker session for one invocation.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::types::{
    CreatedIssue, Issue, ServerInfo, TrackerConfig, Transition, TransitionsResponse, User,
};

mod helpers;
mod http;

use http::HttpBackend;

pub const TRACKER_USER_AGENT: &str = concat!("testexec/", env!("CARGO_PKG_VERSION"));

/// Authenticated session against the tracker REST API.
///
/// Owns the HTTP client; drop it when the invocation is done.
#[derive(Debug, Clone)]
pub struct TrackerSession {
    http: HttpBackend,
    config: TrackerConfig,
}

impl TrackerSession {
    pub fn open(config: TrackerConfig) -> TrackerResult<Self> {
        if config.timeout_secs == 0 {
            return Err(TrackerError::Config {
                message: "request timeout must be at least one second".to_string(),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(TRACKER_USER_AGENT));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| TrackerError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend {
                client,
                base_url: config.server.clone(),
                token: config.token.clone(),
            },
            config,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    pub async fn server_info(&self) -> TrackerResult<ServerInfo> {
        self.http.get_json(&["serverInfo"]).await
    }

    /// The user the token belongs to. Fails with `Unauthorized` on a bad token.
    pub async fn myself(&self) -> TrackerResult<User> {
        self.http.get_json(&["myself"]).await
    }

    /// Create an issue from a raw `fields` object.
    pub async fn create_issue(&self, fields: Map<String, Value>) -> TrackerResult<CreatedIssue> {
        let body = json!({ "fields": fields });
        let created: CreatedIssue = self.http.post_json(&["issue"], &body).await?;
        info!(key = %created.key, "issue created");
        Ok(created)
    }

    /// Create a test execution issue listing `tests` in the configured tests field.
    pub async fn create_test_execution(
        &self,
        project: &str,
        summary: &str,
        tests: &[String],
    ) -> TrackerResult<CreatedIssue> {
        debug!(project, tests = tests.len(), "creating test execution");
        self.create_issue(self.test_execution_fields(project, summary, tests))
            .await
    }

    /// Fields sent by [`TrackerSession::create_test_execution`].
    pub fn test_execution_fields(
        &self,
        project: &str,
        summary: &str,
        tests: &[String],
    ) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("project".into(), json!({ "key": project }));
        fields.insert("summary".into(), json!(summary));
        fields.insert(self.config.tests_field.clone(), json!(tests));
        fields.insert("issuetype".into(), json!({ "name": self.config.issue_type }));
        fields
    }

    pub async fn get_issue(&self, key: &str) -> TrackerResult<Issue> {
        self.http.get_json(&["issue", key]).await
    }

    /// Replace the issue description.
    pub async fn update_description(&self, key: &str, description: &str) -> TrackerResult<()> {
        let body = json!({ "fields": { "description": description } });
        self.http
            .send_no_content(Method::PUT, &["issue", key], &body)
            .await?;
        info!(key, "description updated");
        Ok(())
    }

    pub async fn transitions(&self, key: &str) -> TrackerResult<Vec<Transition>> {
        let response: TransitionsResponse = self
            .http
            .get_json(&["issue", key, "transitions"])
            .await?;
        Ok(response.transitions)
    }

    /// Apply the transition whose name or target status matches `wanted`.
    pub async fn transition_issue(&self, key: &str, wanted: &str) -> TrackerResult<Transition> {
        let available = self.transitions(key).await?;
        let Some(transition) = available.iter().find(|t| t.matches(wanted)).cloned() else {
            return Err(TrackerError::TransitionNotFound {
                key: key.to_string(),
                requested: wanted.to_string(),
                available: available.into_iter().map(|t| t.name).collect(),
            });
        };

        let body = json!({ "transition": { "id": transition.id } });
        self.http
            .send_no_content(Method::POST, &["issue", key, "transitions"], &body)
            .await?;
        info!(key, transition = %transition.name, "issue transitioned");
        Ok(transition)
    }
}

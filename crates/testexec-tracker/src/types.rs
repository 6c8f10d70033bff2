//! Configuration and REST payload types.

use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;
use crate::error::{TrackerError, TrackerResult};

/// Server information from `GET /rest/api/2/serverInfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub server_title: Option<String>,

    #[serde(default)]
    pub deployment_type: Option<String>,
}

/// Authenticated user from `GET /rest/api/2/myself`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub email_address: Option<String>,
}

impl User {
    /// Best available label for messages.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email_address.as_deref())
            .unwrap_or("unknown user")
    }
}

/// Response from `POST /rest/api/2/issue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

/// Any `{ "name": ... }` object (status, issue type, project).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedField {
    pub name: String,
}

/// Issue fields this tool reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<NamedField>,

    #[serde(default)]
    pub issuetype: Option<NamedField>,
}

/// Issue from `GET /rest/api/2/issue/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

impl Issue {
    pub fn status_name(&self) -> Option<&str> {
        self.fields.status.as_ref().map(|s| s.name.as_str())
    }
}

/// Workflow transition from `GET /rest/api/2/issue/{key}/transitions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub to: Option<NamedField>,
}

impl Transition {
    /// Matches the transition name or its target status, ignoring case.
    pub fn matches(&self, wanted: &str) -> bool {
        self.name.eq_ignore_ascii_case(wanted)
            || self
                .to
                .as_ref()
                .is_some_and(|to| to.name.eq_ignore_ascii_case(wanted))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Tracker configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Base URL of the tracker (no trailing slash).
    pub server: String,

    /// Authentication token.
    pub token: BearerToken,

    /// Project key for new issues.
    pub project: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Custom field that receives the list of test keys.
    pub tests_field: String,

    /// Issue type name for created executions.
    pub issue_type: String,
}

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TESTS_FIELD: &str = "customfield_10415";
pub const DEFAULT_ISSUE_TYPE: &str = "Test Execution";

impl TrackerConfig {
    /// Build a config from a server URL and token, with defaults for the rest.
    pub fn new(server: impl AsRef<str>, token: impl Into<String>) -> TrackerResult<Self> {
        let server = parse_server(server.as_ref())?;
        let token = BearerToken::new(token).ok_or_else(|| TrackerError::Config {
            message: "TOKEN is empty".to_string(),
        })?;

        Ok(Self {
            server,
            token,
            project: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            tests_field: DEFAULT_TESTS_FIELD.to_string(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
        })
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `SERVER` | Tracker base URL (required) |
    /// | `TOKEN` | Bearer token (required) |
    /// | `PROJECT` | Project key |
    /// | `TESTEXEC_TIMEOUT` | Request timeout in seconds |
    /// | `TESTEXEC_TESTS_FIELD` | Custom field for test keys |
    /// | `TESTEXEC_ISSUE_TYPE` | Issue type name |
    pub fn from_env() -> TrackerResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`TrackerConfig::from_env`] but reads variables through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> TrackerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = var("SERVER").ok_or_else(|| TrackerError::Config {
            message: "SERVER is not set".to_string(),
        })?;
        let token = var("TOKEN").ok_or_else(|| TrackerError::Config {
            message: "TOKEN is not set".to_string(),
        })?;

        let mut config = Self::new(server, token)?;
        config.project = var("PROJECT").map(|p| p.trim().to_string());
        if let Some(timeout) = var("TESTEXEC_TIMEOUT") {
            config.timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| TrackerError::Config {
                    message: format!(
                        "TESTEXEC_TIMEOUT must be a positive number of seconds, got '{timeout}'"
                    ),
                })?;
        }
        if let Some(field) = var("TESTEXEC_TESTS_FIELD") {
            config.tests_field = field.trim().to_string();
        }
        if let Some(issue_type) = var("TESTEXEC_ISSUE_TYPE") {
            config.issue_type = issue_type.trim().to_string();
        }
        Ok(config)
    }

    /// Set the project key.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the request timeout. Zero is refused by [`crate::TrackerSession::open`].
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the custom field receiving test keys.
    pub fn with_tests_field(mut self, field: impl Into<String>) -> Self {
        self.tests_field = field.into();
        self
    }

    /// Set the issue type name.
    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    /// Project key, or a config error when none is configured.
    pub fn require_project(&self) -> TrackerResult<&str> {
        self.project.as_deref().ok_or_else(|| TrackerError::Config {
            message: "PROJECT is not set".to_string(),
        })
    }
}

fn parse_server(raw: &str) -> TrackerResult<String> {
    let raw = raw.trim();
    let parsed = url::Url::parse(raw).map_err(|e| TrackerError::Config {
        message: format!("SERVER is not a valid URL ('{raw}'): {e}"),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TrackerError::Config {
            message: format!("SERVER must be an http(s) URL, got '{raw}'"),
        });
    }
    Ok(raw.trim_end_matches('/').to_string())
}

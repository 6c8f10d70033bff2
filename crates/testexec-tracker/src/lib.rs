//! Issue tracker client for test execution tickets.
//!
//! Talks to a Jira-compatible REST API (v2) with bearer token auth:
//!
//! - server info and current user (connection check)
//! - create "Test Execution" issues listing test ticket keys
//! - read an issue, replace its description, move it through a transition
//!
//! # Quick Start
//!
//! ```no_run
//! use testexec_tracker::{TrackerConfig, TrackerSession};
//!
//! # async fn example() -> testexec_tracker::TrackerResult<()> {
//! let config = TrackerConfig::from_env()?;
//! let session = TrackerSession::open(config)?;
//!
//! let created = session
//!     .create_test_execution("PROJ", "Nightly run", &["PROJ-1".to_string()])
//!     .await?;
//! println!("created {}", created.key);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `SERVER` | Tracker base URL (required) |
//! | `TOKEN` | Bearer token (required) |
//! | `PROJECT` | Project key used when creating issues |
//! | `TESTEXEC_TIMEOUT` | Request timeout in seconds (default: 30) |
//! | `TESTEXEC_TESTS_FIELD` | Custom field receiving test keys (default: `customfield_10415`) |
//! | `TESTEXEC_ISSUE_TYPE` | Issue type name (default: `Test Execution`) |

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::BearerToken;
pub use client::{TrackerSession, TRACKER_USER_AGENT};
pub use error::{TrackerError, TrackerResult};
pub use types::{
    CreatedIssue, Issue, IssueFields, NamedField, ServerInfo, TrackerConfig, Transition, User,
};

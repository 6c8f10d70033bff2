//! Exit codes for the `testexec` binary.

use testexec_core::ReduceError;
use testexec_tracker::TrackerError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // Unclassified failure
pub const CONFIG_ERROR: i32 = 2; // Missing/invalid SERVER, TOKEN, PROJECT
pub const INPUT_ERROR: i32 = 3; // No CSV, unreadable CSV, missing columns
pub const TRACKER_ERROR: i32 = 4; // Connection, auth, or API failure

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<TrackerError>() {
            return match e {
                TrackerError::Config { .. } => CONFIG_ERROR,
                _ => TRACKER_ERROR,
            };
        }
        if cause.downcast_ref::<ReduceError>().is_some() {
            return INPUT_ERROR;
        }
    }
    FAILURE
}

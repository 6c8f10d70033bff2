//! Test execution result reduction.
//!
//! Turns a CSV export of test-case executions into an ordered, de-duplicated
//! list of ticket identifiers, each paired with the worst status observed for
//! it.
//!
//! ```no_run
//! use testexec_core::{discovery, ingest};
//!
//! # fn example() -> testexec_core::ReduceResult<()> {
//! let dir = discovery::app_dir()?;
//! let csv = discovery::find_first_csv(&dir)?;
//! let reduced = ingest::reduce_csv_file(&csv)?;
//! for (ticket, status) in reduced.iter() {
//!     println!("{ticket}: {status}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod error;
pub mod ingest;
pub mod reduce;
pub mod status;
pub mod ticket;

pub use error::{ReduceError, ReduceResult};
pub use ingest::{reduce_csv_file, reduce_csv_reader, STATUS_COLUMN, TEST_CASE_COLUMN};
pub use reduce::{reduce_rows, ExecutionRow, ReducedResult, Reducer};
pub use status::{Severity, Status};
pub use ticket::{extract_ticket_id, TicketId};

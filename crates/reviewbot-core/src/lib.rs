// Domain logic for the homework review notifier.
//
// Everything here is pure: no network, no clock, no environment. The binary
// crate wires these pieces to reqwest clients and the poll loop.

pub mod envelope;
pub mod error;
pub mod sent_log;
pub mod verdicts;

pub use envelope::check_response;
pub use error::{NotifyError, Result, ShapeError};
pub use sent_log::SentLog;
pub use verdicts::parse_status;

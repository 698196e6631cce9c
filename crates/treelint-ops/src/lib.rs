//! Remediation engine for treelint.
//!
//! This crate turns the classified node list of an audit into report
//! lines and, depending on the task, filesystem changes. Every action is
//! attempted independently: a failure on one node is written to the report
//! and the run moves on to the next.

mod error;
mod remediate;
mod sink;
mod summary;

pub use error::{RemediationError, SinkError};
pub use remediate::{Remediator, remediate, report_line};
pub use sink::{LineSink, MemorySink, ReportSink};
pub use summary::RemediationSummary;

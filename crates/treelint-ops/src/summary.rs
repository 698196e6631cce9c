//! Outcome of a remediation run.

use serde::{Deserialize, Serialize};

use treelint_core::Task;

use crate::error::RemediationError;

/// Counts and errors of a completed remediation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationSummary {
    /// Task that was run.
    pub task: Task,
    /// Violations written to the report without any action.
    pub reported: usize,
    /// Nodes successfully deleted.
    pub removed: usize,
    /// Nodes whose action failed.
    pub failed: usize,
    /// Violations the task deliberately left alone without a report line.
    pub skipped: usize,
    /// Errors that occurred.
    pub errors: Vec<RemediationError>,
}

impl RemediationSummary {
    /// Create an empty summary for a task.
    pub fn new(task: Task) -> Self {
        Self {
            task,
            reported: 0,
            removed: 0,
            failed: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Total violations handled.
    pub fn total(&self) -> usize {
        self.reported + self.removed + self.failed + self.skipped
    }

    /// Check if every attempted action succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub(crate) fn record_error(&mut self, error: RemediationError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        match self.task {
            Task::Clean if self.failed == 0 => format!(
                "Removed {} empty files, reported {} other violations",
                self.removed, self.reported
            ),
            Task::Clean => format!(
                "Removed {} empty files, {} failed, reported {} other violations",
                self.removed, self.failed, self.reported
            ),
            Task::Rename => format!(
                "Rename is not supported, {} violations left as is",
                self.skipped
            ),
            Task::Print | Task::Normalize => format!("Reported {} violations", self.reported),
        }
    }
}

//! Audit configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Report file used when no output destination is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// What to do with the violations found by an audit.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Task {
    /// Report every violation, touch nothing.
    #[default]
    Print,
    /// Delete empty files, report everything else.
    Clean,
    /// Reserved for rename-based sanitization; currently does nothing.
    Rename,
    /// Accepted for compatibility; behaves like `Print`.
    Normalize,
}

/// Configuration for an audit run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AuditConfig {
    /// Root directory to audit.
    pub root: PathBuf,

    /// Task to run against the violations.
    #[builder(default)]
    #[serde(default)]
    pub task: Task,

    /// Report destination; `-` means standard output.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl AuditConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Path is not defined".to_string()),
        }
    }
}

impl AuditConfig {
    /// Create a new audit config builder.
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }

    /// Create a print-only config for a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            task: Task::default(),
            output: default_output(),
        }
    }

    /// Set the task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.task = task;
        self
    }

    /// Check if the report goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output == Path::new("-")
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

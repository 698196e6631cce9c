//! Audited tree container and statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::config::AuditConfig;
use crate::node::Node;

/// Summary statistics for an audited tree.
///
/// Counts cover the root's descendants; the root itself is the audit
/// target and is never counted as a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total size in bytes.
    pub total_size: u64,
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories.
    pub total_dirs: u64,
    /// Names starting or ending with a dot.
    pub dot_names: u64,
    /// Empty directories.
    pub empty_dirs: u64,
    /// Empty files.
    pub empty_files: u64,
    /// Names with disallowed characters.
    pub invalid_names: u64,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute stats for the descendants of `root`.
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::new();
        stats.total_size = root.size;
        for node in root.descendants() {
            stats.record(node);
        }
        stats
    }

    /// Update stats with a single node.
    pub fn record(&mut self, node: &Node) {
        if node.is_dir() {
            self.total_dirs += 1;
        } else {
            self.total_files += 1;
        }

        match node.classification {
            Classification::Valid => {}
            Classification::DotName => self.dot_names += 1,
            Classification::EmptyDirectory => self.empty_dirs += 1,
            Classification::EmptyFile => self.empty_files += 1,
            Classification::InvalidCharacters => self.invalid_names += 1,
        }
    }

    /// Total number of violations.
    pub fn total_violations(&self) -> u64 {
        self.dot_names + self.empty_dirs + self.empty_files + self.invalid_names
    }
}

/// Complete audited tree with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTree {
    /// Root node of the tree.
    pub root: Node,

    /// Canonical root path that was walked.
    pub root_path: PathBuf,

    /// When this walk was performed.
    pub scanned_at: SystemTime,

    /// Duration of the walk.
    pub scan_duration: Duration,

    /// Configuration used.
    pub config: AuditConfig,

    /// Summary statistics.
    pub stats: TreeStats,
}

impl AuditTree {
    /// Create a new audited tree; stats are derived from `root`.
    pub fn new(
        root: Node,
        root_path: PathBuf,
        config: AuditConfig,
        scan_duration: Duration,
    ) -> Self {
        let stats = TreeStats::collect(&root);
        Self {
            root,
            root_path,
            scanned_at: SystemTime::now(),
            scan_duration,
            config,
            stats,
        }
    }

    /// Every node below the root, in visit order.
    pub fn flatten(&self) -> Vec<&Node> {
        self.root.descendants()
    }

    /// Non-valid nodes below the root, in visit order.
    pub fn violations(&self) -> Vec<&Node> {
        self.flatten()
            .into_iter()
            .filter(|node| node.classification.is_violation())
            .collect()
    }

    /// Get the total size of the tree.
    pub fn total_size(&self) -> u64 {
        self.root.size
    }

    /// Check if any violation was found.
    pub fn has_violations(&self) -> bool {
        self.stats.total_violations() > 0
    }
}

//! Directory walking engine for treelint.
//!
//! This crate builds the audited node tree from a root directory.
//!
//! # Overview
//!
//! `treelint-scan` is responsible for traversing a directory and building
//! the tree that the remediation pass later consumes. Key properties:
//!
//! - **Post-order visits**: every node is handed to a [`Visitor`] after all
//!   of its children, so a classifier sees final child counts and sizes
//! - **Size aggregation**: a directory's size is the sum of its retained
//!   children
//! - **Permission tolerant**: a directory that cannot be listed because
//!   access is denied is pruned from the tree instead of failing the walk
//!
//! # Example
//!
//! ```rust,no_run
//! use treelint_scan::{AuditConfig, Classification, Node, TreeWalker, Visitor};
//!
//! struct EverythingValid;
//!
//! impl Visitor for EverythingValid {
//!     fn visit(&mut self, _node: &Node) -> Classification {
//!         Classification::Valid
//!     }
//! }
//!
//! let config = AuditConfig::new("/path/to/audit");
//! let tree = TreeWalker::new().scan(&config, &mut EverythingValid).unwrap();
//!
//! println!("Total size: {} bytes", tree.total_size());
//! println!("Total files: {}", tree.stats.total_files);
//! ```

mod walker;

pub use walker::{TreeWalker, WalkOutcome};

// Re-export core types for convenience
pub use treelint_core::{
    AuditConfig, AuditTree, Classification, Node, NodeKind, TreeStats, Visitor, WalkError,
};

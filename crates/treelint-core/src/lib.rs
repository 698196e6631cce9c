//! Core types and traits for treelint.
//!
//! This crate provides the fundamental data structures shared by the
//! treelint crates: filesystem nodes, their hygiene classification,
//! the audited tree container, and run configuration.

mod classification;
mod config;
mod error;
mod node;
mod tree;

pub use classification::Classification;
pub use config::{
    AuditConfig, AuditConfigBuilder, AuditConfigBuilderError, DEFAULT_OUTPUT_FILE, Task,
};
pub use error::WalkError;
pub use node::{Node, NodeKind, Visitor};
pub use tree::{AuditTree, TreeStats};

//! Hygiene rules for treelint.
//!
//! This crate classifies nodes of an audited tree:
//! - Dot-prefixed or dot-suffixed names
//! - Empty directories and empty files
//! - Names containing characters outside the allow-list

mod charset;
mod classifier;

pub use charset::{has_only_allowed_chars, is_allowed_char, offending_chars};
pub use classifier::{Classifier, classify};

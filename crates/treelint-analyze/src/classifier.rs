//! Ordered rule list mapping a node to its classification.

use tracing::debug;

use treelint_core::{Classification, Node, Visitor};

use crate::charset::{has_only_allowed_chars, offending_chars};

type Rule = fn(&Node) -> bool;

/// Rules in precedence order; the first match wins.
const RULES: [(Classification, Rule); 4] = [
    (Classification::DotName, is_dot_name),
    (Classification::EmptyDirectory, is_empty_directory),
    (Classification::EmptyFile, is_empty_file),
    (Classification::InvalidCharacters, has_invalid_characters),
];

fn is_dot_name(node: &Node) -> bool {
    node.name.starts_with('.') || node.name.ends_with('.')
}

fn is_empty_directory(node: &Node) -> bool {
    node.is_dir() && node.child_count() == 0
}

fn is_empty_file(node: &Node) -> bool {
    node.is_file() && node.size == 0
}

fn has_invalid_characters(node: &Node) -> bool {
    !has_only_allowed_chars(&node.name)
}

/// Classify a node using only its own name, kind, size and child count.
pub fn classify(node: &Node) -> Classification {
    RULES
        .iter()
        .find(|(_, rule)| rule(node))
        .map(|(classification, _)| *classification)
        .unwrap_or(Classification::Valid)
}

/// Walker visitor that applies [`classify`] to every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify a node.
    pub fn classify(&self, node: &Node) -> Classification {
        classify(node)
    }
}

impl Visitor for Classifier {
    fn visit(&mut self, node: &Node) -> Classification {
        let classification = classify(node);
        if classification == Classification::InvalidCharacters {
            debug!(
                path = %node.path.display(),
                chars = ?offending_chars(&node.name),
                "disallowed characters in name"
            );
        }
        classification
    }
}

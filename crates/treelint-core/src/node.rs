//! File and directory node types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::classification::Classification;

/// Type of file system node.
///
/// Anything that is neither a regular file nor a directory is left out
/// of the tree entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single file or directory in the audited tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Absolute path; unique within one run.
    pub path: PathBuf,

    /// File/directory name (last path segment).
    pub name: CompactString,

    /// Node type.
    pub kind: NodeKind,

    /// Size in bytes (sum of retained children for directories).
    pub size: u64,

    /// Lower-cased extension without the dot (files only).
    pub extension: Option<CompactString>,

    /// Children in directory-listing order (directories only).
    pub children: Vec<Node>,

    /// Classification assigned when the node was visited.
    pub classification: Classification,
}

impl Node {
    /// Create a new file node.
    pub fn new_file(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|ext| CompactString::from(ext.to_string_lossy().to_lowercase()));

        Self {
            name: base_name(&path),
            path,
            kind: NodeKind::File,
            size,
            extension,
            children: Vec::new(),
            classification: Classification::Valid,
        }
    }

    /// Create a new directory node; its size is the sum of its children.
    pub fn new_directory(path: impl Into<PathBuf>, children: Vec<Node>) -> Self {
        let path = path.into();
        let size = children.iter().map(|child| child.size).sum();

        Self {
            name: base_name(&path),
            path,
            kind: NodeKind::Directory,
            size,
            extension: None,
            children,
            classification: Classification::Valid,
        }
    }

    /// Attach a classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// This node and all its descendants in visit order: every subtree
    /// before its directory, siblings in listing order.
    pub fn post_order(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_post_order(&mut out);
        out
    }

    /// Like [`Node::post_order`], without the node itself.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_post_order(&mut out);
        }
        out
    }

    fn collect_post_order<'a>(&'a self, out: &mut Vec<&'a Node>) {
        for child in &self.children {
            child.collect_post_order(out);
        }
        out.push(self);
    }
}

fn base_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::from(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::from(path.to_string_lossy()))
}

/// Callback invoked by the walker once per node, after the node's
/// children have been visited. The returned classification is stored
/// on the node and never recomputed.
pub trait Visitor {
    fn visit(&mut self, node: &Node) -> Classification;
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn visit(&mut self, node: &Node) -> Classification {
        (**self).visit(node)
    }
}

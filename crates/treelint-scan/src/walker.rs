//! Recursive, single-threaded tree walker.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span, trace};

use treelint_core::{AuditConfig, AuditTree, Node, Visitor, WalkError};

/// Result of walking a single path.
#[derive(Debug)]
pub enum WalkOutcome {
    /// The path was retained; the node is fully built and classified.
    Node(Node),
    /// The path was left out of the tree (unreadable metadata, access
    /// denied on listing, or an unsupported file type).
    Pruned,
}

impl WalkOutcome {
    /// Get the node, if the path was retained.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Pruned => None,
        }
    }

    /// Check if the path was pruned.
    pub fn is_pruned(&self) -> bool {
        matches!(self, Self::Pruned)
    }
}

/// Depth-first walker that builds the node tree bottom-up.
#[derive(Debug, Default)]
pub struct TreeWalker {
    _private: (),
}

impl TreeWalker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the configured root and return the classified tree.
    pub fn scan(
        &self,
        config: &AuditConfig,
        visitor: &mut dyn Visitor,
    ) -> Result<AuditTree, WalkError> {
        let start = Instant::now();
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| WalkError::io(&config.root, e))?;

        // Verify root is a directory
        if !root_path.is_dir() {
            return Err(WalkError::NotADirectory { path: root_path });
        }

        let span = info_span!("walk", root = %root_path.display());
        let _guard = span.enter();

        let root = match self.walk(&root_path, visitor)? {
            WalkOutcome::Node(node) => node,
            WalkOutcome::Pruned => return Err(WalkError::RootUnavailable { path: root_path }),
        };

        let tree = AuditTree::new(root, root_path, config.clone(), start.elapsed());
        info!(
            files = tree.stats.total_files,
            dirs = tree.stats.total_dirs,
            bytes = tree.stats.total_size,
            violations = tree.stats.total_violations(),
            elapsed_ms = tree.scan_duration.as_millis() as u64,
            "walk complete"
        );

        Ok(tree)
    }

    /// Walk a single path, recursing into directories.
    ///
    /// Only a listing failure other than permission denied is an error.
    pub fn walk(&self, path: &Path, visitor: &mut dyn Visitor) -> Result<WalkOutcome, WalkError> {
        // Follows symlinks; a dangling link fails here and is dropped.
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "metadata unavailable, pruning");
                return Ok(WalkOutcome::Pruned);
            }
        };

        let file_type = metadata.file_type();

        if file_type.is_file() {
            let node = Node::new_file(path, metadata.len());
            return Ok(WalkOutcome::Node(visit(node, visitor)));
        }

        if !file_type.is_dir() {
            debug!(path = %path.display(), "unsupported file type, pruning");
            return Ok(WalkOutcome::Pruned);
        }

        let entries = match list_dir(path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "permission denied, pruning subtree");
                return Ok(WalkOutcome::Pruned);
            }
            Err(err) => return Err(WalkError::io(path, err)),
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            if let WalkOutcome::Node(child) = self.walk(&entry, visitor)? {
                children.push(child);
            }
        }

        let node = Node::new_directory(path, children);
        Ok(WalkOutcome::Node(visit(node, visitor)))
    }
}

fn visit(node: Node, visitor: &mut dyn Visitor) -> Node {
    let classification = visitor.visit(&node);
    trace!(path = %node.path.display(), %classification, "visited");
    node.with_classification(classification)
}

/// Immediate children of `path` in listing order.
fn list_dir(path: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use treelint_core::Classification;
    use std::fs;
    use tempfile::TempDir;

    /// Records visit order and marks empty directories.
    #[derive(Default)]
    struct Recorder {
        visited: Vec<PathBuf>,
    }

    impl Visitor for Recorder {
        fn visit(&mut self, node: &Node) -> Classification {
            self.visited.push(node.path.clone());
            if node.is_dir() && node.child_count() == 0 {
                Classification::EmptyDirectory
            } else {
                Classification::Valid
            }
        }
    }

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();

        temp
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let config = AuditConfig::new(temp.path());

        let mut recorder = Recorder::default();
        let tree = TreeWalker::new().scan(&config, &mut recorder).unwrap();

        assert_eq!(tree.stats.total_files, 3);
        assert_eq!(tree.stats.total_dirs, 3);
        assert_eq!(tree.root.size, 5 + 17 + 4);
        assert_eq!(tree.stats.empty_dirs, 1);
        // root is visited too
        assert_eq!(recorder.visited.len(), 7);
    }

    #[test]
    fn test_visit_order_matches_flatten() {
        let temp = create_test_tree();
        let config = AuditConfig::new(temp.path());

        let mut recorder = Recorder::default();
        let tree = TreeWalker::new().scan(&config, &mut recorder).unwrap();

        let mut expected: Vec<PathBuf> = tree.flatten().iter().map(|n| n.path.clone()).collect();
        expected.push(tree.root_path.clone());
        assert_eq!(recorder.visited, expected);
    }

    #[test]
    fn test_directory_visited_after_children() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let mut recorder = Recorder::default();
        TreeWalker::new().walk(&root, &mut recorder).unwrap();

        let position = |p: PathBuf| recorder.visited.iter().position(|v| *v == p).unwrap();
        let dir1 = position(root.join("dir1"));
        assert!(position(root.join("dir1/subdir")) < dir1);
        assert!(position(root.join("dir1/subdir/file3.txt")) < position(root.join("dir1/subdir")));
        assert!(position(root.join("dir1/file2.txt")) < dir1);
        assert_eq!(*recorder.visited.last().unwrap(), root);
    }

    #[test]
    fn test_walk_single_file() {
        let temp = create_test_tree();
        let file = temp.path().join("file1.txt");

        let node = TreeWalker::new()
            .walk(&file, &mut Recorder::default())
            .unwrap()
            .into_node()
            .unwrap();
        assert!(node.is_file());
        assert_eq!(node.size, 5);
        assert_eq!(node.extension.as_deref(), Some("txt"));
    }

    #[test]
    fn test_missing_path_is_pruned() {
        let temp = TempDir::new().unwrap();
        let outcome = TreeWalker::new()
            .walk(&temp.path().join("nope"), &mut Recorder::default())
            .unwrap();
        assert!(outcome.is_pruned());
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let temp = create_test_tree();
        let config = AuditConfig::new(temp.path().join("file1.txt"));

        let err = TreeWalker::new().scan(&config, &mut Recorder::default()).unwrap_err();
        assert!(matches!(err, WalkError::NotADirectory { .. }));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let config = AuditConfig::new(temp.path().join("missing"));

        let err = TreeWalker::new().scan(&config, &mut Recorder::default()).unwrap_err();
        assert!(matches!(err, WalkError::NotFound { .. }));
    }
}

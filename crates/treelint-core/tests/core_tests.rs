use std::path::PathBuf;
use std::time::Duration;

use treelint_core::{
    AuditConfig, AuditTree, Classification, DEFAULT_OUTPUT_FILE, Node, NodeKind, Task, TreeStats,
    Visitor,
};

#[test]
fn test_node_kind_discrimination() {
    assert!(NodeKind::File.is_file());
    assert!(!NodeKind::File.is_dir());
    assert!(NodeKind::Directory.is_dir());
    assert!(!NodeKind::Directory.is_file());
}

#[test]
fn test_nested_directory_sizes() {
    let inner = Node::new_directory(
        "/root/photos/2023",
        vec![
            Node::new_file("/root/photos/2023/a.jpg", 300),
            Node::new_file("/root/photos/2023/b.jpg", 700),
        ],
    );
    let photos = Node::new_directory(
        "/root/photos",
        vec![inner, Node::new_file("/root/photos/index.txt", 24)],
    );
    let root = Node::new_directory("/root", vec![photos, Node::new_directory("/root/e", vec![])]);

    for node in root.post_order() {
        if node.is_dir() {
            let sum: u64 = node.children.iter().map(|c| c.size).sum();
            assert_eq!(node.size, sum, "size mismatch at {}", node.path.display());
        }
    }
    assert_eq!(root.size, 1024);
}

#[test]
fn test_visitor_through_mutable_reference() {
    struct CountingVisitor {
        seen: Vec<PathBuf>,
    }

    impl Visitor for CountingVisitor {
        fn visit(&mut self, node: &Node) -> Classification {
            self.seen.push(node.path.clone());
            Classification::Valid
        }
    }

    fn visit_all<V: Visitor>(mut visitor: V, nodes: &[Node]) {
        for node in nodes {
            visitor.visit(node);
        }
    }

    let mut counter = CountingVisitor { seen: Vec::new() };
    visit_all(&mut counter, &[Node::new_file("/a", 1), Node::new_file("/b", 2)]);
    assert_eq!(counter.seen, [PathBuf::from("/a"), PathBuf::from("/b")]);
}

#[test]
fn test_audit_tree_serializes() {
    let root = Node::new_directory(
        "/r",
        vec![Node::new_file("/r/b..txt", 3).with_classification(Classification::DotName)],
    );
    let tree = AuditTree::new(
        root,
        PathBuf::from("/r"),
        AuditConfig::new("/r").with_task(Task::Clean),
        Duration::from_millis(5),
    );

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["config"]["task"], "clean");
    assert_eq!(json["root"]["children"][0]["classification"], "DotName");
    assert_eq!(json["stats"]["dot_names"], 1);
}

#[test]
fn test_default_config() {
    let config = AuditConfig::default();
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.task, Task::Print);
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
}

#[test]
fn test_stats_record_counts_kinds() {
    let mut stats = TreeStats::new();
    stats.record(&Node::new_file("/x", 1));
    stats.record(
        &Node::new_directory("/d", vec![]).with_classification(Classification::EmptyDirectory),
    );
    stats.record(&Node::new_file("/q?", 2).with_classification(Classification::InvalidCharacters));

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_dirs, 1);
    assert_eq!(stats.empty_dirs, 1);
    assert_eq!(stats.invalid_names, 1);
    assert_eq!(stats.total_violations(), 2);
}

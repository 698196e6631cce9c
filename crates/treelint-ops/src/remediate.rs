//! Task-driven remediation over a classified node list.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use treelint_core::{Classification, Node, Task};

use crate::error::{RemediationError, SinkError};
use crate::sink::ReportSink;
use crate::summary::RemediationSummary;

/// Informational report line: `<label>\t<path>`.
pub fn report_line(node: &Node) -> String {
    format!("{}\t{}", node.classification.label(), node.path.display())
}

/// Applies a task to the violations of a walked tree.
///
/// Decisions use the classification recorded during the walk. Nothing is
/// re-walked after a deletion, so a directory emptied by this run is not
/// reported as empty.
#[derive(Debug, Clone)]
pub struct Remediator {
    task: Task,
    skip: Option<PathBuf>,
}

impl Remediator {
    /// Create a remediator for a task.
    pub fn new(task: Task) -> Self {
        Self { task, skip: None }
    }

    /// Leave the node at `path` out of the run entirely.
    ///
    /// Used for the report file, which is still empty when the tree is
    /// classified if it lives under the audited root.
    pub fn skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip = Some(path.into());
        self
    }

    /// Process `nodes` in order, skipping valid ones.
    ///
    /// Only a sink failure aborts; per-node failures are reported and
    /// counted in the summary.
    pub fn run<'a, I>(
        &self,
        nodes: I,
        sink: &mut dyn ReportSink,
    ) -> Result<RemediationSummary, SinkError>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut summary = RemediationSummary::new(self.task);

        for node in nodes.into_iter().filter(|n| n.classification.is_violation()) {
            if self.skip.as_deref() == Some(node.path.as_path()) {
                debug!(path = %node.path.display(), "skipping report file");
                continue;
            }

            match self.task {
                Task::Print | Task::Normalize => {
                    sink.write_line(&report_line(node))?;
                    summary.reported += 1;
                }
                Task::Clean if node.classification == Classification::EmptyFile => {
                    remove_empty_file(node, sink, &mut summary)?;
                }
                Task::Clean => {
                    sink.write_line(&report_line(node))?;
                    summary.reported += 1;
                }
                Task::Rename => {
                    summary.skipped += 1;
                }
            }
        }

        if self.task == Task::Rename && summary.skipped > 0 {
            warn!(skipped = summary.skipped, "rename task has no remediation, nothing changed");
        }

        sink.flush()?;
        info!(
            task = %self.task,
            reported = summary.reported,
            removed = summary.removed,
            failed = summary.failed,
            "remediation complete"
        );

        Ok(summary)
    }
}

fn remove_empty_file(
    node: &Node,
    sink: &mut dyn ReportSink,
    summary: &mut RemediationSummary,
) -> Result<(), SinkError> {
    match fs::remove_file(&node.path) {
        Ok(()) => {
            debug!(path = %node.path.display(), "removed empty file");
            sink.write_line(&format!("REMOVED\t{}", node.path.display()))?;
            summary.removed += 1;
        }
        Err(err) => {
            warn!(path = %node.path.display(), error = %err, "failed to remove empty file");
            let error = RemediationError::new(node.path.clone(), err.to_string());
            sink.write_line(&format!("ERROR\t{}\t{}", node.path.display(), error.message))?;
            summary.record_error(error);
        }
    }
    Ok(())
}

/// Run `task` over `nodes`, writing to `sink`.
pub fn remediate<'a, I>(
    nodes: I,
    task: Task,
    sink: &mut dyn ReportSink,
) -> Result<RemediationSummary, SinkError>
where
    I: IntoIterator<Item = &'a Node>,
{
    Remediator::new(task).run(nodes, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::new_file("/r/a.txt", 10),
            Node::new_file("/r/b.", 3).with_classification(Classification::DotName),
            Node::new_directory("/r/empty", vec![])
                .with_classification(Classification::EmptyDirectory),
        ]
    }

    #[test]
    fn test_report_line_format() {
        let node =
            Node::new_file("/r/bad#name.txt", 0).with_classification(Classification::EmptyFile);
        assert_eq!(report_line(&node), "EMPTY_FILE\t/r/bad#name.txt");
    }

    #[test]
    fn test_print_skips_valid_nodes() {
        let nodes = sample_nodes();
        let mut sink = MemorySink::new();

        let summary = remediate(&nodes, Task::Print, &mut sink).unwrap();

        assert_eq!(sink.lines(), ["DOT\t/r/b.", "EMPTY_DIR\t/r/empty"]);
        assert_eq!(summary.reported, 2);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_normalize_behaves_like_print() {
        let nodes = sample_nodes();
        let mut print_sink = MemorySink::new();
        let mut normalize_sink = MemorySink::new();

        remediate(&nodes, Task::Print, &mut print_sink).unwrap();
        remediate(&nodes, Task::Normalize, &mut normalize_sink).unwrap();

        assert_eq!(print_sink.lines(), normalize_sink.lines());
    }

    #[test]
    fn test_rename_is_a_no_op() {
        let nodes = sample_nodes();
        let mut sink = MemorySink::new();

        let summary = Remediator::new(Task::Rename).run(&nodes, &mut sink).unwrap();

        assert!(sink.lines().is_empty());
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.reported, 0);
    }

    #[test]
    fn test_skipped_path_is_neither_reported_nor_removed() {
        let nodes = vec![
            Node::new_file("/nonexistent/treelint/output.txt", 0)
                .with_classification(Classification::EmptyFile),
            Node::new_file("/nonexistent/treelint/.b", 0)
                .with_classification(Classification::DotName),
        ];
        let mut sink = MemorySink::new();

        let summary = Remediator::new(Task::Clean)
            .skip_path("/nonexistent/treelint/output.txt")
            .run(&nodes, &mut sink)
            .unwrap();

        assert_eq!(sink.lines(), ["DOT\t/nonexistent/treelint/.b"]);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.removed, 0);
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_clean_reports_missing_file_and_continues() {
        let nodes = vec![
            Node::new_file("/nonexistent/treelint/a", 0)
                .with_classification(Classification::EmptyFile),
            Node::new_file("/nonexistent/treelint/.b", 0)
                .with_classification(Classification::DotName),
        ];
        let mut sink = MemorySink::new();

        let summary = remediate(&nodes, Task::Clean, &mut sink).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.reported, 1);
        assert_eq!(summary.errors[0].path, nodes[0].path);
        assert!(sink.lines()[0].starts_with("ERROR\t/nonexistent/treelint/a\t"));
        assert_eq!(sink.lines()[1], "DOT\t/nonexistent/treelint/.b");
    }
}

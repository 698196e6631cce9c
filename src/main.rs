//! treelint - audit a directory tree for naming and content hygiene.
//!
//! Usage:
//!   treelint print PATH              Report violations to output.txt
//!   treelint clean PATH              Delete empty files, report the rest
//!   treelint rename PATH             Accepted; makes no changes
//!   treelint normalize PATH          Same as print
//!   treelint --help                  Show help

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use treelint_analyze::Classifier;
use treelint_core::{AuditConfig, AuditTree, Classification, DEFAULT_OUTPUT_FILE, Task, TreeStats};
use treelint_ops::{LineSink, RemediationSummary, Remediator};
use treelint_scan::TreeWalker;

#[derive(Parser)]
#[command(
    name = "treelint",
    version,
    about = "Audit a directory tree for naming and content hygiene violations",
    long_about = "treelint finds dot-prefixed or dot-suffixed names, empty files, empty \
                  directories and names with disallowed characters.\n\n\
                  Violations are written as `LABEL<TAB>PATH` lines to the report file. \
                  The `clean` task additionally deletes empty files."
)]
struct Cli {
    /// Task to run: print, clean, rename or normalize
    #[arg(value_parser = parse_task)]
    task: Task,

    /// Directory to audit
    path: PathBuf,

    /// Report file (`-` writes the report to stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Summary format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable run summary.
#[derive(Serialize)]
struct RunReport<'a> {
    root: &'a std::path::Path,
    report: &'a std::path::Path,
    stats: &'a TreeStats,
    remediation: &'a RemediationSummary,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AuditConfig::builder()
        .root(cli.path)
        .task(cli.task)
        .output(cli.output)
        .build()?;
    check_output(&config, cli.format)?;

    let (tree, summary) = run(&config)?;

    match cli.format {
        OutputFormat::Text => print_summary(&config, &tree, &summary),
        OutputFormat::Json => {
            let report = RunReport {
                root: &tree.root_path,
                report: &config.output,
                stats: &tree.stats,
                remediation: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if !summary.is_success() {
        std::process::exit(2);
    }

    Ok(())
}

/// Reject a report and a JSON summary that would share stdout.
fn check_output(config: &AuditConfig, format: OutputFormat) -> Result<()> {
    if config.writes_to_stdout() && matches!(format, OutputFormat::Json) {
        bail!("--format json cannot be combined with a report on stdout (-o -)");
    }
    Ok(())
}

fn parse_task(s: &str) -> Result<Task, String> {
    s.parse().map_err(|_| format!("Task \"{s}\" is not defined"))
}

/// Install the log subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Walk, classify and remediate the configured tree.
fn run(config: &AuditConfig) -> Result<(AuditTree, RemediationSummary)> {
    info!(root = %config.root.display(), task = %config.task, "starting audit");

    let tree = TreeWalker::new()
        .scan(config, &mut Classifier::new())
        .context("Scan failed")?;

    let remediator = Remediator::new(config.task);
    let summary = if config.writes_to_stdout() {
        let mut sink = LineSink::new(io::stdout().lock());
        remediator.run(tree.violations(), &mut sink)
    } else {
        let mut sink = LineSink::create(&config.output)?;
        let report = config
            .output
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", config.output.display()))?;
        remediator.skip_path(report).run(tree.violations(), &mut sink)
    }
    .context("Failed to write report")?;

    Ok((tree, summary))
}

/// Print a human-readable summary to stderr.
fn print_summary(config: &AuditConfig, tree: &AuditTree, summary: &RemediationSummary) {
    let stats = &tree.stats;

    eprintln!();
    eprintln!("{}", "─".repeat(60));
    eprintln!(" {} - {}", tree.root_path.display(), format_size(tree.total_size()));
    eprintln!(" {} files, {} directories", stats.total_files, stats.total_dirs);
    eprintln!(" Scanned in {:.2}s", tree.scan_duration.as_secs_f64());
    eprintln!("{}", "─".repeat(60));
    eprintln!();

    if tree.has_violations() {
        for (class, count) in [
            (Classification::DotName, stats.dot_names),
            (Classification::EmptyDirectory, stats.empty_dirs),
            (Classification::EmptyFile, stats.empty_files),
            (Classification::InvalidCharacters, stats.invalid_names),
        ] {
            eprintln!("   {:<12} {count:>8}", class.label());
        }
    } else {
        eprintln!(" No violations found");
    }
    eprintln!();

    eprintln!(" {}", summary.summary());
    for error in &summary.errors {
        eprintln!("   {error}");
    }

    if !config.writes_to_stdout() {
        eprintln!(" Report written to {}", config.output.display());
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

//! Append-only report sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SinkError;

/// Line-oriented report destination.
pub trait ReportSink {
    /// Append one line; the sink adds the terminating newline.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    /// Flush buffered lines.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}

/// Sink writing newline-terminated UTF-8 lines to any writer.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: BufWriter<W>,
    lines_written: usize,
}

impl<W: Write> LineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            lines_written: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Write(e.into_error()))
    }
}

impl LineSink<File> {
    /// Create (or truncate) a report file.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ReportSink for LineSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that keeps lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the sink, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl ReportSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

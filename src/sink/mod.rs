//! Console sinks.
//!
//! # Responsibilities
//! - Accept one rendered line per permitted log call
//! - Route it to standard output or standard error
//!
//! # Design Decisions
//! - Writes are synchronous and unbuffered beyond the std lock
//! - The console is assumed reliable: write errors are dropped, never surfaced
//! - `MemorySink` exists so embedders and tests can observe writes

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Console stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination for rendered log lines.
pub trait Sink: Send + Sync {
    fn write(&self, stream: Stream, line: &str);
}

/// Writes to the process's stdout / stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, stream: Stream, line: &str) {
        let result = match stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
        if let Err(e) = result {
            tracing::trace!(error = %e, ?stream, "Console write failed");
        }
    }
}

/// In-memory sink that keeps every line it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all writes so far, oldest first.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write(&self, stream: Stream, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((stream, line.to_string()));
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, stream: Stream, line: &str) {
        (**self).write(stream, line)
    }
}

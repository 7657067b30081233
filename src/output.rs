//! # Output Sink
//!
//! The OutputSink owns the active log destination: standard output, standard
//! error, or a file it opened itself. Exactly one destination is active at any
//! time. Switching away from a file closes it before the new destination is
//! adopted, and only the sink ever holds the file handle.

use crate::config::OutputTarget;
use crate::error::DebugLogError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The active destination.
#[derive(Debug)]
enum Destination {
    Stdout,
    Stderr,
    File { file: File, path: PathBuf },
}

/// Holder of the active output destination.
#[derive(Debug)]
pub struct OutputSink {
    dest: Destination,
}

impl OutputSink {
    /// Creates a sink writing to standard output.
    pub fn new() -> Self {
        Self {
            dest: Destination::Stdout,
        }
    }

    /// Creates a sink for the given target, opening the file if there is one.
    pub fn open(target: &OutputTarget) -> Result<Self, DebugLogError> {
        let mut sink = Self::new();
        sink.set_target(target)?;
        Ok(sink)
    }

    /// Switch to any target.
    pub fn set_target(&mut self, target: &OutputTarget) -> Result<(), DebugLogError> {
        match target {
            OutputTarget::Stdout => self.set_stdout(),
            OutputTarget::Stderr => self.set_stderr(),
            OutputTarget::File(path) => self.set_file(path)?,
        }
        Ok(())
    }

    /// Create (or truncate) `path` and make it the active destination.
    ///
    /// If the file cannot be created the current destination stays active.
    pub fn set_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DebugLogError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| DebugLogError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.release_file();
        log::debug!("log output switched to '{}'", path.display());
        self.dest = Destination::File {
            file,
            path: path.to_path_buf(),
        };
        Ok(())
    }

    pub fn set_stdout(&mut self) {
        self.release_file();
        self.dest = Destination::Stdout;
    }

    pub fn set_stderr(&mut self) {
        self.release_file();
        self.dest = Destination::Stderr;
    }

    /// Close any owned file and fall back to standard output.
    pub fn deinit(&mut self) {
        self.set_stdout();
    }

    /// Describes the active destination.
    pub fn target(&self) -> OutputTarget {
        match &self.dest {
            Destination::Stdout => OutputTarget::Stdout,
            Destination::Stderr => OutputTarget::Stderr,
            Destination::File { path, .. } => OutputTarget::File(path.clone()),
        }
    }

    /// Whether the active destination is a file owned by this sink.
    pub fn owns_file(&self) -> bool {
        matches!(self.dest, Destination::File { .. })
    }

    /// Write `text` to the active destination with a single write call.
    ///
    /// A partial write is reported as [`DebugLogError::ShortWrite`]; nothing is
    /// retried.
    pub fn write(&mut self, text: &str) -> Result<(), DebugLogError> {
        let bytes = text.as_bytes();
        let result = match &mut self.dest {
            Destination::Stdout => io::stdout().lock().write(bytes),
            Destination::Stderr => io::stderr().lock().write(bytes),
            Destination::File { file, .. } => file.write(bytes),
        };

        match result {
            Ok(written) if written == bytes.len() => Ok(()),
            Ok(written) => Err(DebugLogError::ShortWrite {
                written,
                expected: bytes.len(),
            }),
            Err(e) => Err(DebugLogError::Write(e)),
        }
    }

    /// Close the owned file, if any. Close errors are ignored.
    fn release_file(&mut self) {
        match std::mem::replace(&mut self.dest, Destination::Stdout) {
            Destination::File { mut file, path } => {
                let _ = file.flush();
                drop(file);
                log::debug!("closed log file '{}'", path.display());
            }
            other => self.dest = other,
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new()
    }
}

//! Destination for raw diagnostic output (child process stderr).

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Where verbose diagnostics go.
///
/// Cloning shares the destination; writes land in issue order because the
/// walk is sequential.
#[derive(Clone, Default)]
pub enum DiagnosticSink {
    /// Drop everything.
    #[default]
    Discard,
    /// Process standard error.
    Stderr,
    /// In-memory buffer, readable with [`DiagnosticSink::contents`].
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl DiagnosticSink {
    /// A fresh in-memory sink.
    pub fn buffer() -> Self {
        Self::Buffer(Arc::new(Mutex::new(Vec::new())))
    }

    /// Whether anything written will be kept.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Discard)
    }

    /// Write the whole buffer.
    pub fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Discard => Ok(()),
            Self::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(buf)?;
                stderr.flush()
            }
            Self::Buffer(shared) => {
                let mut guard = shared
                    .lock()
                    .map_err(|_| io::Error::new(io::ErrorKind::Other, "diagnostic buffer poisoned"))?;
                guard.extend_from_slice(buf);
                Ok(())
            }
        }
    }

    /// Snapshot of a buffer sink as text; empty for other sinks.
    pub fn contents(&self) -> String {
        match self {
            Self::Buffer(shared) => shared
                .lock()
                .map(|buf| String::from_utf8_lossy(&buf).into_owned())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard => f.write_str("Discard"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Buffer(_) => f.write_str("Buffer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_is_shared_between_clones() {
        let sink = DiagnosticSink::buffer();
        let clone = sink.clone();
        clone.write_all(b"one\n").unwrap();
        sink.write_all(b"two\n").unwrap();
        assert_eq!(sink.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_discard_sink_is_disabled() {
        let sink = DiagnosticSink::default();
        assert!(!sink.is_enabled());
        sink.write_all(b"dropped").unwrap();
        assert!(sink.contents().is_empty());
    }
}

//! Line-prefixing writer for child process stderr.

use std::io::{self, Write};

use crate::sink::DiagnosticSink;

/// Tags every physical line written through it with a fixed prefix.
///
/// The prefix for a line is emitted lazily, when its first byte arrives,
/// so a trailing newline does not produce a dangling prefix. Lines split
/// across chunks are tagged once.
///
/// Sink failures are remembered rather than returned from [`push`], so a
/// caller draining a pipe can keep draining; [`finish`] reports them.
///
/// [`push`]: PrefixWriter::push
/// [`finish`]: PrefixWriter::finish
#[derive(Debug)]
pub struct PrefixWriter {
    prefix: Vec<u8>,
    sink: DiagnosticSink,
    at_line_start: bool,
    wrote_any: bool,
    failure: Option<io::Error>,
}

impl PrefixWriter {
    /// Prefix lines with `"{label}: "`.
    pub fn new(sink: DiagnosticSink, label: &str) -> Self {
        Self {
            prefix: format!("{label}: ").into_bytes(),
            sink,
            at_line_start: true,
            wrote_any: false,
            failure: None,
        }
    }

    /// Forward a chunk of output.
    pub fn push(&mut self, chunk: &[u8]) {
        if chunk.is_empty() || !self.sink.is_enabled() || self.failure.is_some() {
            return;
        }

        let mut out = Vec::with_capacity(chunk.len() + self.prefix.len());
        for line in chunk.split_inclusive(|&b| b == b'\n') {
            if self.at_line_start {
                out.extend_from_slice(&self.prefix);
            }
            out.extend_from_slice(line);
            self.at_line_start = line.ends_with(b"\n");
        }

        match self.sink.write_all(&out) {
            Ok(()) => self.wrote_any = true,
            Err(e) => self.failure = Some(e),
        }
    }

    /// Whether any output has reached the sink.
    pub fn wrote_any(&self) -> bool {
        self.wrote_any
    }

    /// Terminate an unfinished last line and report any earlier failure.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(e) = self.failure.take() {
            return Err(e);
        }
        if self.wrote_any && !self.at_line_start {
            self.sink.write_all(b"\n")?;
            self.at_line_start = true;
        }
        Ok(())
    }
}

impl Write for PrefixWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

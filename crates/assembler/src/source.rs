//! Line-by-line reading of program text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::SourceError;

/// One physical line of a program, trimmed, with its 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Reads a program one line at a time.
///
/// Every physical line is counted, blank and comment lines included, so the
/// numbers match what an editor shows. The underlying reader is dropped as
/// soon as input is exhausted or [`SourceLines::close`] is called.
#[derive(Debug)]
pub struct SourceLines<R> {
    reader: Option<R>,
    number: usize,
    buf: Vec<u8>,
}

impl SourceLines<BufReader<File>> {
    /// Open a program file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "open failed");
            SourceError::Open {
                path: path.display().to_string(),
            }
        })?;
        debug!(path = %path.display(), "opened program");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            number: 0,
            buf: Vec::new(),
        }
    }

    /// The next line, or `Ok(None)` once input is exhausted.
    ///
    /// The line terminator and surrounding whitespace are stripped. Invalid
    /// UTF-8 is replaced rather than rejected; such lines can only ever be
    /// unknown instructions.
    pub fn next_line(&mut self) -> Result<Option<SourceLine>, SourceError> {
        let reader = match self.reader.as_mut() {
            Some(reader) => reader,
            None => return Ok(None),
        };

        self.buf.clear();
        let read = reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| SourceError::Read {
                line: self.number + 1,
                reason: e.to_string(),
            })?;
        if read == 0 {
            self.close();
            return Ok(None);
        }

        self.number += 1;
        let text = String::from_utf8_lossy(&self.buf).trim().to_string();
        Ok(Some(SourceLine {
            number: self.number,
            text,
        }))
    }

    /// Release the underlying reader. Later calls to `next_line` return
    /// `Ok(None)`.
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        self.reader = None;
        debug!(lines = self.line_number(), "closed program source");
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.number
    }
}

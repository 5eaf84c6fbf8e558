use crate::error::AnalyzeError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A lazy, finite sequence of raw log lines.
pub trait LineSource {
    /// The next line without its terminator, or `None` once the source is exhausted.
    fn next_line(&mut self) -> io::Result<Option<&str>>;
}

/// Adapts any buffered reader into a [`LineSource`].
///
/// Both buffers are reused between lines. Bytes that are not valid UTF-8 are
/// replaced rather than failing the read.
pub struct ReaderSource<R> {
    reader: R,
    raw: Vec<u8>,
    line: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            line: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.raw.clear();
        if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(None);
        }

        if self.raw.last() == Some(&b'\n') {
            self.raw.pop();
            if self.raw.last() == Some(&b'\r') {
                self.raw.pop();
            }
        }

        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.raw));
        Ok(Some(self.line.as_str()))
    }
}

/// Open a log file for streaming. Failing here is the only way a missing or
/// unreadable file is reported; nothing has been parsed yet.
pub fn open_log_file(path: &Path) -> Result<ReaderSource<BufReader<File>>, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::source_unavailable(path, e))?;
    Ok(ReaderSource::new(BufReader::new(file)))
}

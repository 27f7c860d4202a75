//! Line-source collaborator: turns a file into a sequence of text lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::warn;

/// Yields the successive lines of a text file, without line terminators.
///
/// A missing or unreadable file is tolerated: the source simply yields
/// zero lines, and the parser runs against it without error. The sequence
/// is finite and non-restartable; a read error mid-stream ends it.
pub struct FileLines {
    inner: Option<Lines<BufReader<File>>>,
}

impl FileLines {
    /// Open `path` as a line source. Failure to open is logged, not raised.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self {
                inner: Some(BufReader::new(file).lines()),
            },
            Err(e) => {
                warn!("Cannot open {}: {}; treating as empty input", path.display(), e);
                Self { inner: None }
            }
        }
    }
}

impl Iterator for FileLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.inner.as_mut()?.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("Read error, stopping line input: {}", e);
                self.inner = None;
                None
            }
        }
    }
}

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use listings_core::ListingRecord;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Check the directory is writable by creating a temp file in it.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes a JSON array one element at a time.
///
/// The array is only terminated by [`close`](Self::close). If the process
/// dies before that, the output is left unterminated and will not parse;
/// there is no temp file or rename step.
pub struct StreamingArrayWriter<W: Write> {
    out: W,
    written: u64,
}

impl StreamingArrayWriter<BufWriter<File>> {
    /// Truncates or creates `path`, creating its parent directory if needed.
    pub fn create(path: &Path) -> Result<Self, PersistError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_output_dir(parent)?;
        }
        let file = File::create(path)?;
        Self::open(BufWriter::new(file))
    }
}

impl<W: Write> StreamingArrayWriter<W> {
    /// Emits the array-start token.
    pub fn open(mut out: W) -> Result<Self, PersistError> {
        out.write_all(b"[\n")?;
        Ok(Self { out, written: 0 })
    }

    pub fn append(&mut self, record: &ListingRecord) -> Result<(), PersistError> {
        if self.written > 0 {
            self.out.write_all(b",\n")?;
        }
        serde_json::to_writer_pretty(&mut self.out, record)?;
        self.written += 1;
        Ok(())
    }

    pub fn wrote_any(&self) -> bool {
        self.written > 0
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Pushes buffered bytes down to the underlying sink.
    pub fn flush(&mut self) -> Result<(), PersistError> {
        self.out.flush()?;
        Ok(())
    }

    /// Emits the array-end token and hands back the sink.
    pub fn close(mut self) -> Result<W, PersistError> {
        self.out.write_all(b"\n]")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

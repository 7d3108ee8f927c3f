use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SelectError, SelectResult};

/// Write-only text file, truncated on open and closed on drop.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputSink {
    pub fn open(path: impl Into<PathBuf>) -> SelectResult<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| SelectError::SinkOpen {
            path: path.clone(),
            source,
        })?;
        log::debug!("opened output sink {}", path.display());
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, text: &str) -> SelectResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| SelectError::SinkWrite {
                path: self.path.clone(),
                source,
            })
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            log::warn!("failed to flush {} on close: {err}", self.path.display());
        }
        log::debug!("closed output sink {}", self.path.display());
    }
}

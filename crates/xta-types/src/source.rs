//! Where programs and documents come from.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// A transform program or input document, identified by exactly one of a
/// filesystem path or inline text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Content read from a file on every [`Source::open`].
    Path(PathBuf),
    /// Content held in memory.
    Inline(String),
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self::Inline(text.into())
    }

    /// The text shown in report headers: the absolute path for file
    /// sources, the content itself for inline sources.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => absolute(path).display().to_string(),
            Self::Inline(text) => text.clone(),
        }
    }

    /// Open a fresh reader over the content.
    ///
    /// Every call yields an independent reader, so the same logical input
    /// can be consumed twice. File handles are released when the reader is
    /// dropped.
    pub fn open(&self) -> Result<Box<dyn Read + '_>, ContractViolation> {
        match self {
            Self::Path(path) => {
                if !path.exists() {
                    return Err(ContractViolation::MissingFile(path.clone()));
                }
                let file = File::open(path).map_err(|source| ContractViolation::Unreadable {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Inline(text) => Ok(Box::new(Cursor::new(text.as_bytes()))),
        }
    }

    /// Directory containing a file source; `None` for inline sources.
    pub fn base_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Path(path) => absolute(path).parent().map(Path::to_path_buf),
            Self::Inline(_) => None,
        }
    }

    /// Returns `true` for file sources.
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

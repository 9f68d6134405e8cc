use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RegenError;

pub const MANIFEST_FILENAME: &str = "Contents.json";

/// One entry of the `images` list. Fields other than `filename`
/// (`idiom`, `scale`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// The `Contents.json` of an asset catalog directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contents {
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

impl Contents {
    /// Path of the manifest inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILENAME)
    }

    pub fn load(path: &Path) -> Result<Contents, RegenError> {
        let content = fs::read_to_string(path).map_err(|e| RegenError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| RegenError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Filename of the entry at `index`.
    ///
    /// `path` is only used for error reporting.
    pub fn filename_at(&self, index: usize, path: &Path) -> Result<&str, RegenError> {
        let entry = self.images.get(index).ok_or_else(|| RegenError::MissingImageEntry {
            path: path.to_path_buf(),
            index,
            count: self.images.len(),
        })?;
        entry
            .filename
            .as_deref()
            .ok_or_else(|| RegenError::MissingFilename {
                path: path.to_path_buf(),
                index,
            })
    }
}

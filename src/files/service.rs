//! File Service
//!
//! Owns the JSON data file that mirrors the store and the temporary files
//! used for report downloads.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;
use crate::files::render_report;
use crate::store::{Recipe, Snapshot};

/// File access rooted at a single data directory.
#[derive(Debug, Clone)]
pub struct FileService {
    data_dir: PathBuf,
    data_file_name: String,
}

impl FileService {
    pub fn new(data_dir: impl Into<PathBuf>, data_file_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            data_file_name: data_file_name.into(),
        }
    }

    /// Creates a FileService from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.data_dir.clone(), config.data_file_name.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file_name)
    }

    // == Save ==
    /// Replaces the data file contents with `json`.
    ///
    /// The new contents are written to a sibling temp file first and then
    /// renamed over the data file, so readers never observe a partial write.
    pub fn save_to_file(&self, json: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let mut tmp = NamedTempFile::new_in(&self.data_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.data_file_path()).map_err(|e| e.error)?;

        debug!("Saved {} bytes to {:?}", json.len(), self.data_file_path());
        Ok(())
    }

    // == Read ==
    /// Returns the data file contents, or `None` if it does not exist yet.
    pub fn read_from_file(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.data_file_path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // == Snapshot ==
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.save_to_file(&json)
    }

    /// Loads the snapshot from the data file. A missing or blank file is `None`.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        match self.read_from_file()? {
            Some(contents) if !contents.trim().is_empty() => {
                Ok(Some(serde_json::from_str(&contents)?))
            }
            _ => Ok(None),
        }
    }

    // == Temp File ==
    /// Creates an empty temp file in the data directory.
    ///
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_file(&self, suffix: &str) -> Result<NamedTempFile> {
        fs::create_dir_all(&self.data_dir)?;
        let file = tempfile::Builder::new()
            .prefix("recipes-")
            .suffix(suffix)
            .tempfile_in(&self.data_dir)?;
        Ok(file)
    }

    // == Report ==
    /// Renders `recipes` into a fresh temp file.
    pub fn write_report(&self, recipes: &[Recipe]) -> Result<NamedTempFile> {
        let mut file = self.create_temp_file(".txt")?;
        file.write_all(render_report(recipes).as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

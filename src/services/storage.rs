// src/services/storage.rs
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

const UPLOADS_SUBDIR: &str = "uploads";
const POINTER_FILE: &str = "profile.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where everything lives on disk, derived from the public directory.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub public_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub data_file: PathBuf,
}

impl StorageLayout {
    pub fn from_public_dir(public_dir: impl Into<PathBuf>) -> Self {
        let public_dir = public_dir.into();
        Self {
            uploads_dir: public_dir.join(UPLOADS_SUBDIR),
            data_file: public_dir.join(POINTER_FILE),
            public_dir,
        }
    }

    /// Create the public and uploads directories if they are missing.
    /// Safe to call repeatedly.
    pub fn ensure_dirs(&self) -> Result<(), StorageError> {
        for dir in [&self.public_dir, &self.uploads_dir] {
            if !dir.is_dir() {
                create_dir(dir)?;
                info!("created directory {}", dir.display());
            }
        }
        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(path).map_err(|source| StorageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

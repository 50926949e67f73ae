// src/services/upload_services.rs
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, error};
use thiserror::Error;

use crate::models::profile_pointer::ProfilePointer;
use crate::models::uploaded_file::UploadedFile;
use crate::repositories::profile_pointer_repo::{ProfilePointerRepo, RepoError};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("failed to write upload: {0}")]
    Io(#[from] io::Error),
    #[error("failed to persist profile pointer: {0}")]
    Repo(#[from] RepoError),
}

/// Stores received photos and moves the profile pointer to the newest one.
#[derive(Debug, Clone)]
pub struct UploadService {
    uploads_dir: PathBuf,
    pointer_repo: ProfilePointerRepo,
}

impl UploadService {
    pub fn new(uploads_dir: impl Into<PathBuf>, pointer_repo: ProfilePointerRepo) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            pointer_repo,
        }
    }

    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<ProfilePointer, UploadError> {
        self.store_at(original_name, bytes, Utc::now()).await
    }

    /// Write the file, then point the profile at it.
    ///
    /// A file generated in the same millisecond as an earlier one replaces it.
    /// Previous uploads are left on disk.
    pub async fn store_at(
        &self,
        original_name: &str,
        bytes: &[u8],
        now: DateTime<Utc>,
    ) -> Result<ProfilePointer, UploadError> {
        let file = UploadedFile::generate(original_name, now.timestamp_millis());
        let disk_path = file.disk_path(&self.uploads_dir);

        if let Err(e) = tokio::fs::write(&disk_path, bytes).await {
            error!("failed to write upload {}: {}", disk_path.display(), e);
            return Err(e.into());
        }
        debug!(
            "stored upload {} ({} bytes, original name {:?})",
            disk_path.display(),
            bytes.len(),
            original_name
        );

        let relative = file.relative_path();
        if let Err(e) = self.pointer_repo.write(&relative).await {
            error!("failed to update pointer record: {}", e);
            return Err(e.into());
        }

        Ok(ProfilePointer::new(relative))
    }
}

// src/repositories/profile_pointer_repo.rs
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::models::profile_pointer::ProfilePointer;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Repository for the single pointer record, kept as one JSON file on disk.
#[derive(Debug, Clone)]
pub struct ProfilePointerRepo {
    data_file: PathBuf,
}

impl ProfilePointerRepo {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Current profile image path.
    ///
    /// Returns `None` when no photo was ever set and also when the record can't
    /// be read or parsed; callers see both as "no profile image". Corruption is
    /// only reported through the log.
    pub async fn read(&self) -> Option<String> {
        let raw = match tokio::fs::read_to_string(&self.data_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no pointer record at {}", self.data_file.display());
                return None;
            }
            Err(e) => {
                warn!("failed to read pointer record {}: {}", self.data_file.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<ProfilePointer>(&raw) {
            Ok(pointer) => pointer.current(),
            Err(e) => {
                warn!("pointer record {} is corrupted: {}", self.data_file.display(), e);
                None
            }
        }
    }

    /// Replace the record with `{"profileImage": path}`, pretty-printed.
    ///
    /// The file is truncated and rewritten in place.
    pub async fn write(&self, path: &str) -> Result<(), RepoError> {
        let body = serde_json::to_string_pretty(&ProfilePointer::new(path))?;
        tokio::fs::write(&self.data_file, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> ProfilePointerRepo {
        ProfilePointerRepo::new(dir.path().join("profile.json"))
    }

    #[tokio::test]
    async fn fresh_store_reads_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(repo_in(&dir).read().await, None);
    }

    #[tokio::test]
    async fn write_then_read_returns_same_path() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.write("/public/uploads/profile_1.png").await.unwrap();

        assert_eq!(repo.read().await.as_deref(), Some("/public/uploads/profile_1.png"));
        assert_eq!(repo.read().await.as_deref(), Some("/public/uploads/profile_1.png"));
    }

    #[tokio::test]
    async fn write_overwrites_whole_record_as_indented_json() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        repo.write("/public/uploads/profile_1.png").await.unwrap();
        repo.write("/public/uploads/profile_2.jpg").await.unwrap();

        let raw = std::fs::read_to_string(repo.data_file()).unwrap();
        assert_eq!(raw, "{\n  \"profileImage\": \"/public/uploads/profile_2.jpg\"\n}");
    }

    #[rstest]
    #[case("not json at all")]
    #[case("{\"profileImage\": ")]
    #[case("[1, 2, 3]")]
    #[case("{\"profileImage\": null}")]
    #[case("{\"profileImage\": \"\"}")]
    #[case("{\"profileImage\": 17}")]
    #[tokio::test]
    async fn unusable_record_reads_as_none(#[case] contents: &str) {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.data_file(), contents).unwrap();

        assert_eq!(repo.read().await, None);
    }

    #[tokio::test]
    async fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let repo = ProfilePointerRepo::new(dir.path().join("missing").join("profile.json"));

        assert!(matches!(repo.write("/x").await, Err(RepoError::Io(_))));
    }
}

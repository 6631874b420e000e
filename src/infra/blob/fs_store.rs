use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::usecase::ports::blob::{BlobEntry, BlobError, BlobStore};

/// Bucket store backed by one directory per bucket under `root`.
pub struct FsBlobStore {
    pub root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, path: &str) -> Result<PathBuf, BlobError> {
        let mut resolved = self.root.join(checked_segment(bucket)?);
        let mut segments = 0;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            resolved.push(checked_segment(segment)?);
            segments += 1;
        }
        if segments == 0 {
            return Err(BlobError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }

    fn folder_path(&self, bucket: &str, folder: &str) -> Result<PathBuf, BlobError> {
        let mut resolved = self.root.join(checked_segment(bucket)?);
        for segment in folder.split('/').filter(|segment| !segment.is_empty()) {
            resolved.push(checked_segment(segment)?);
        }
        Ok(resolved)
    }
}

fn checked_segment(segment: &str) -> Result<&str, BlobError> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['\\', ':', '\0'])
        || segment.starts_with('/');
    if invalid {
        Err(BlobError::InvalidPath(segment.to_string()))
    } else {
        Ok(segment)
    }
}

fn file_url(path: &Path) -> String {
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let display = absolute.to_string_lossy().replace('\\', "/");
    if display.starts_with('/') {
        format!("file://{display}")
    } else {
        format!("file:///{display}")
    }
}

fn write_object(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create bucket dir: {}", parent.display()))?;
    }
    fs::write(target, bytes).with_context(|| format!("failed to write object: {}", target.display()))
}

fn read_entries(dir: &Path) -> Result<Vec<BlobEntry>> {
    let mut entries = Vec::new();
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(entries),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to list folder: {}", dir.display()))
        }
    };

    for item in listing {
        let item = item.with_context(|| format!("failed to read entry in: {}", dir.display()))?;
        let metadata = item
            .metadata()
            .with_context(|| format!("failed to stat: {}", item.path().display()))?;
        if !metadata.is_file() {
            continue;
        }
        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map(|time| DateTime::<Utc>::from(time).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        entries.push(BlobEntry {
            name: item.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            created_at: created,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

impl BlobStore for FsBlobStore {
    fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        upsert: bool,
    ) -> Result<String, BlobError> {
        let target = self.object_path(bucket, path)?;
        if !upsert && target.exists() {
            return Err(BlobError::AlreadyExists(path.to_string()));
        }
        write_object(&target, bytes).map_err(BlobError::from_anyhow)?;
        tracing::info!(bucket, path, size = bytes.len(), "object stored");
        Ok(file_url(&target))
    }

    fn list(&self, bucket: &str, folder: &str) -> Result<Vec<BlobEntry>, BlobError> {
        let dir = self.folder_path(bucket, folder)?;
        read_entries(&dir).map_err(BlobError::from_anyhow)
    }

    fn public_url(&self, bucket: &str, path: &str) -> Result<String, BlobError> {
        Ok(file_url(&self.object_path(bucket, path)?))
    }

    fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, BlobError> {
        let target = self.object_path(bucket, path)?;
        match fs::read(&target) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(BlobError::NotFound(path.to_string()))
            }
            Err(err) => Err(BlobError::Message(format!(
                "failed to read object {}: {err}",
                target.display()
            ))),
        }
    }

    fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), BlobError> {
        for path in paths {
            let target = self.object_path(bucket, path)?;
            match fs::remove_file(&target) {
                Ok(()) => tracing::info!(bucket, path = path.as_str(), "object removed"),
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    tracing::warn!(bucket, path = path.as_str(), "object to remove was missing")
                }
                Err(err) => {
                    return Err(BlobError::Message(format!(
                        "failed to remove object {}: {err}",
                        target.display()
                    )))
                }
            }
        }
        Ok(())
    }
}

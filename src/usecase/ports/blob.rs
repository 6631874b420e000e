use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
    #[error("invalid object path: {0}")]
    InvalidPath(String),
    #[error("object already exists: {0}")]
    AlreadyExists(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

impl BlobError {
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        BlobError::Message(format!("{err:#}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobEntry {
    pub name: String,
    pub size: u64,
    pub created_at: String,
}

/// Named-bucket object storage. Paths are `/`-separated and relative to
/// the bucket.
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` and returns the object's public URL.
    fn upload(&self, bucket: &str, path: &str, bytes: &[u8], upsert: bool)
        -> Result<String, BlobError>;
    fn list(&self, bucket: &str, folder: &str) -> Result<Vec<BlobEntry>, BlobError>;
    fn public_url(&self, bucket: &str, path: &str) -> Result<String, BlobError>;
    fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, BlobError>;
    fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), BlobError>;
}

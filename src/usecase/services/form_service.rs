use std::sync::Arc;

use crate::domain::entities::form_file::FormFile;
use crate::usecase::error::{ServiceError, ServiceResult};
use crate::usecase::ports::blob::{BlobError, BlobStore};

pub const FORMS_BUCKET: &str = "forms";
pub const UPLOAD_FOLDER: &str = "uploads";

pub struct FormService {
    blobs: Arc<dyn BlobStore>,
}

impl FormService {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Stores a new form and returns its public URL. Existing forms are
    /// never overwritten.
    pub fn upload(&self, file_name: &str, bytes: &[u8]) -> ServiceResult<String> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ServiceError::validation("Choose a file to upload"));
        }
        match self
            .blobs
            .upload(FORMS_BUCKET, &object_path(file_name), bytes, false)
        {
            Ok(url) => Ok(url),
            Err(BlobError::AlreadyExists(_)) => Err(ServiceError::Conflict(format!(
                "A form named {file_name} already exists"
            ))),
            Err(err) => Err(err.into()),
        }
    }

    pub fn list(&self) -> ServiceResult<Vec<FormFile>> {
        let entries = self.blobs.list(FORMS_BUCKET, UPLOAD_FOLDER)?;
        let mut forms = Vec::with_capacity(entries.len());
        for entry in entries {
            let public_url = self
                .blobs
                .public_url(FORMS_BUCKET, &object_path(&entry.name))?;
            forms.push(FormFile {
                name: entry.name,
                size: entry.size,
                created_at: entry.created_at,
                public_url,
            });
        }
        forms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(forms)
    }

    pub fn download(&self, name: &str) -> ServiceResult<Vec<u8>> {
        match self.blobs.download(FORMS_BUCKET, &object_path(name)) {
            Ok(bytes) => Ok(bytes),
            Err(BlobError::NotFound(_)) => Err(ServiceError::NotFound(format!("form {name}"))),
            Err(err) => Err(err.into()),
        }
    }

    pub fn delete(&self, name: &str) -> ServiceResult<()> {
        if name.trim().is_empty() {
            return Err(ServiceError::validation("Missing file name"));
        }
        self.blobs.remove(FORMS_BUCKET, &[object_path(name)])?;
        tracing::info!(form = name, "form deleted");
        Ok(())
    }
}

fn object_path(name: &str) -> String {
    format!("{UPLOAD_FOLDER}/{name}")
}

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Bootstrap administrator created on first start when no admin exists.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub blob_dir: PathBuf,
    pub page_size: usize,
    pub session_ttl_minutes: i64,
    pub admin_seed: Option<AdminSeed>,
}

impl AppConfig {
    /// Resolves the configuration from the per-user data directory and the
    /// `RMS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        Self::from_lookup(&data_dir, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(data_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let db_path = value("RMS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("records.sqlite"));
        let blob_dir = value("RMS_BLOB_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("buckets"));

        let page_size = match value("RMS_PAGE_SIZE") {
            Some(raw) => {
                let parsed: usize = raw
                    .parse()
                    .with_context(|| format!("RMS_PAGE_SIZE is not a number: {raw}"))?;
                if parsed == 0 {
                    return Err(anyhow!("RMS_PAGE_SIZE must be at least 1"));
                }
                parsed
            }
            None => DEFAULT_PAGE_SIZE,
        };

        let session_ttl_minutes = match value("RMS_SESSION_TTL_MINUTES") {
            Some(raw) => {
                let parsed: i64 = raw
                    .parse()
                    .with_context(|| format!("RMS_SESSION_TTL_MINUTES is not a number: {raw}"))?;
                if parsed <= 0 {
                    return Err(anyhow!("RMS_SESSION_TTL_MINUTES must be positive"));
                }
                parsed
            }
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        let admin_seed = match (value("RMS_ADMIN_EMAIL"), lookup("RMS_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !password.is_empty() => {
                Some(AdminSeed { email, password })
            }
            _ => None,
        };

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            db_path,
            blob_dir,
            page_size,
            session_ttl_minutes,
            admin_seed,
        })
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "subdivision", "rms")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

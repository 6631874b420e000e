use anyhow::anyhow;
use rfd::FileDialog;

use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::{AppServices, AppState};
use crate::usecase::error::ServiceError;

/// Asks where to save `name` and writes the stored form there.
pub fn save_form_copy(services: &AppServices, state: AppState, name: &str) {
    let Some(target) = FileDialog::new().set_file_name(name).save_file() else {
        return;
    };
    let result = run_blocking(|| {
        let bytes = services.forms.download(name)?;
        std::fs::write(&target, bytes)
            .map_err(|err| anyhow!("failed to write {}: {err}", target.display()))?;
        Ok::<_, ServiceError>(())
    });
    match result {
        Ok(()) => state.report(format!("Saved {name} to {}", target.display())),
        Err(err) => state.report(format!("Download failed: {err}")),
    }
}

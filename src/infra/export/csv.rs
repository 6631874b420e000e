use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::feedback::Feedback;

const FEEDBACK_HEADER: [&str; 4] = ["ID", "Message", "Email", "Created At"];

pub fn write_feedback_csv<W: Write>(writer: W, feedback: &[Feedback]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(FEEDBACK_HEADER)
        .context("failed to write csv header")?;

    for item in feedback {
        csv_writer
            .write_record([
                item.id.as_str(),
                item.message.as_str(),
                item.email.as_deref().unwrap_or(""),
                item.created_at.as_str(),
            ])
            .with_context(|| format!("failed to write feedback row: {}", item.id))?;
    }

    csv_writer.flush().context("failed to flush csv output")?;
    Ok(feedback.len())
}

pub fn export_feedback_csv(csv_path: &Path, feedback: &[Feedback]) -> Result<usize> {
    let file = std::fs::File::create(csv_path)
        .with_context(|| format!("failed to create csv: {}", csv_path.display()))?;
    write_feedback_csv(file, feedback)
}

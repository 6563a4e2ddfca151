use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::AnalysisResponse;

pub fn sanitize_filename(url: &str) -> String {
    let stripped = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    stripped.replace(|c: char| !c.is_alphanumeric() && c != '.', &'_'.to_string())
}

/// Writes the response as pretty JSON to `<dir>/<sanitized url>.json`.
pub async fn save_report(dir: &Path, url: &str, response: &AnalysisResponse) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

    let path = dir.join(format!("{}.json", sanitize_filename(url)));
    let json = serde_json::to_vec_pretty(response).context("Failed to serialize report")?;
    fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}

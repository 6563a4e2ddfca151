use log::{debug, info};
use std::process::Stdio;
use tokio::process::Command;

use crate::error::CollectionError;
use crate::models::{LighthouseReport, LighthouseSettings};

/// Runs the Lighthouse CLI against `url` (performance category only) and
/// parses the JSON it prints. The child is killed if the caller's task is
/// aborted.
pub async fn run_lighthouse(
    url: &str,
    settings: &LighthouseSettings,
) -> Result<LighthouseReport, CollectionError> {
    info!("Running Lighthouse for {}", url);

    let command = Command::new(&settings.binary)
        .arg(url)
        .arg("--output=json")
        .arg("--output-path=stdout")
        .arg("--quiet")
        .arg("--only-categories=performance")
        .arg("--chrome-flags=--headless --no-sandbox")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = command.wait_with_output().await?;

    if !output.status.success() {
        return Err(CollectionError::Probe(format!(
            "Lighthouse failed for {}: {}",
            url,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let report = parse_lighthouse_report(&output.stdout)?;
    debug!(
        "Lighthouse performance score for {}: {:?}",
        url,
        report.performance_score()
    );
    Ok(report)
}

pub fn parse_lighthouse_report(bytes: &[u8]) -> Result<LighthouseReport, CollectionError> {
    Ok(serde_json::from_slice::<LighthouseReport>(bytes)?)
}

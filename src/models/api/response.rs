use chrono::Utc;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::models::analysis::{AnalysisResult, RawSignals};

// Analysis response status
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Completed,
    Error,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            AnalysisStatus::Completed => "completed",
            AnalysisStatus::Error => "error",
        };
        write!(f, "{}", status_str)
    }
}

// Envelope returned by the analyze handlers and the CLI
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub status: AnalysisStatus,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    /// Raw signals with per-category `collected` flags, debug mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<RawSignals>,
}

impl AnalysisResponse {
    pub fn completed(result: AnalysisResult, signals: Option<RawSignals>) -> Self {
        AnalysisResponse {
            id: Uuid::new_v4(),
            status: AnalysisStatus::Completed,
            message: format!("Analysis of {} completed", result.url),
            timestamp: Utc::now().to_rfc3339(),
            result: Some(result),
            signals,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        AnalysisResponse {
            id: Uuid::new_v4(),
            status: AnalysisStatus::Error,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
            result: None,
            signals: None,
        }
    }
}

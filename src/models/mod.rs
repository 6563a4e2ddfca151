// src/models/mod.rs

pub mod analysis;
pub mod api;
pub mod app;
pub mod lighthouse;

pub use analysis::*;
pub use api::{AnalysisResponse, AnalysisStatus, AnalyzeParams, AnalyzeRequest};
pub use app::{AppConfig, AppState, CollectionSettings, LighthouseSettings};
pub use lighthouse::LighthouseReport;

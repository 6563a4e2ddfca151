pub mod analysis_service;
pub mod fetch_service;
pub mod site_audit_service;

pub use analysis_service::Analyzer;
pub use fetch_service::{HttpFetcher, PageFetcher};
pub use site_audit_service::run_lighthouse;

// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod lighthouse;

pub use compute::{compute_sample_stats, font_size_histogram};
pub use lighthouse::{parse_lighthouse_report, run_lighthouse};

use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The slice of a Lighthouse JSON report the performance collector reads.
#[derive(Debug, Deserialize, Serialize)]
pub struct LighthouseReport {
    #[serde(rename = "requestedUrl")]
    pub requested_url: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

impl LighthouseReport {
    /// Performance category on the 0-100 scale used everywhere else.
    pub fn performance_score(&self) -> Option<f64> {
        self.categories
            .performance
            .as_ref()
            .and_then(|c| c.score)
            .map(|s| s * 100.0)
    }

    pub fn audit_value(&self, id: &str) -> Option<f64> {
        self.audits.get(id).and_then(|a| a.numeric_value)
    }
}

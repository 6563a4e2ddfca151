use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Audit {
    #[serde(rename = "numericValue")]
    pub numeric_value: Option<f64>,
}

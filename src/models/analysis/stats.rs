use serde::{Deserialize, Serialize};

// pub struct to store sample statistics (min, max, median, std deviation)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SampleStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

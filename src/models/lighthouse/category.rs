use serde::{Deserialize, Serialize};

// pub struct for each category score, 0.0-1.0 as Lighthouse reports it
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories; the probe only requests performance
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Categories {
    pub performance: Option<Category>,
}

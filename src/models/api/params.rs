use serde::Deserialize;

// GET /analyze?url=...
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub url: String,
}

// POST /analyze {"url": "..."}
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

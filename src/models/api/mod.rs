pub mod params;
pub mod response;

pub use params::{AnalyzeParams, AnalyzeRequest};
pub use response::{AnalysisResponse, AnalysisStatus};

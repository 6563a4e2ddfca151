use crate::models::app::config::AppConfig;
use crate::services::{Analyzer, HttpFetcher};

pub struct AppState {
    pub analyzer: Analyzer,
    pub fetcher: HttpFetcher,
    pub config: AppConfig,
}

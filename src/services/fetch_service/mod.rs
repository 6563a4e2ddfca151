pub mod http_fetcher;

use std::future::Future;

use crate::error::FetchError;
use crate::models::AnalysisTarget;

pub use http_fetcher::HttpFetcher;

/// Anything that can turn a URL into a fetched page. The engine only sees
/// this trait; tests swap in canned pages.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<AnalysisTarget, FetchError>> + Send;
}

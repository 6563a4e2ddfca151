use log::{debug, info};
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::models::{AnalysisTarget, PageTiming};
use crate::services::fetch_service::PageFetcher;

/// Plain HTTP fetch. Reports the response headers and the wall-clock time
/// to the last body byte as the page's load time.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    /// reqwest's own timeout surfaces as an error without the budget.
    fn fetch_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            e.into()
        }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<AnalysisTarget, FetchError> {
        info!("Fetching {}", url);
        let started = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = resp.url().to_string();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let html = resp.text().await.map_err(|e| self.fetch_error(e))?;
        let load_time_secs = started.elapsed().as_secs_f64();

        debug!(
            "Fetched {} ({} bytes, {} headers) in {:.2}s",
            final_url,
            html.len(),
            headers.len(),
            load_time_secs
        );

        Ok(AnalysisTarget::new(final_url, html)
            .with_headers(headers)
            .with_timing(PageTiming {
                load_time_secs: Some(load_time_secs),
                ..Default::default()
            }))
    }
}

#![allow(dead_code)]

use std::time::Duration;

use webboost::error::FetchError;
use webboost::models::{AnalysisTarget, CollectionSettings, PageTiming, ScoringWeights};
use webboost::services::{Analyzer, PageFetcher};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Serves one canned page for every URL.
pub struct StaticPage {
    pub html: String,
    pub headers: Vec<(String, String)>,
    pub status: u16,
    pub delay: Option<Duration>,
}

impl StaticPage {
    pub fn ok(html: &str) -> Self {
        StaticPage {
            html: html.to_string(),
            headers: vec![
                ("Content-Type".to_string(), "text/html; charset=utf-8".to_string()),
                ("Strict-Transport-Security".to_string(), "max-age=31536000".to_string()),
            ],
            status: 200,
            delay: None,
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.headers.clear();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl PageFetcher for StaticPage {
    async fn fetch(&self, url: &str) -> Result<AnalysisTarget, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if !(200..300).contains(&self.status) {
            return Err(FetchError::Status {
                status: self.status,
                url: url.to_string(),
            });
        }
        Ok(AnalysisTarget::new(url, self.html.clone())
            .with_headers(self.headers.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .with_timing(PageTiming {
                load_time_secs: Some(1.1),
                ..Default::default()
            }))
    }
}

pub fn analyzer() -> Analyzer {
    let settings = CollectionSettings {
        category_timeout: Duration::from_secs(5),
        lighthouse: None,
    };
    Analyzer::new(ScoringWeights::standard().expect("standard weights"), settings)
}

/// A tidy article: good title and description lengths, one h1, three
/// headings in total, no images and no citations.
pub const ARTICLE: &str = r#"<!DOCTYPE html>
<html><head>
<title>Timeouts and cancellation in async Rust code.</title>
<meta name="description" content="Learn how timeouts, cancellation and structured concurrency keep async Rust services responsive, with worked examples and pitfalls to avoid.">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="canonical" href="https://example.com/guides/async-rust-timeouts">
</head><body>
<nav><a href="/">Home</a><a href="/guides">Guides</a><a href="/guides/async">Async</a></nav>
<main class="article">
<h1>Async timeouts in practice</h1>
<p>Every network call in an async service needs a timeout. Without one a slow peer holds a task
forever and the service slowly runs out of capacity. Timeouts turn that silent failure into an
error the caller can handle.</p>
<h2>Choosing a budget</h2>
<p>Start from the latency your users accept and work backwards. Give each step of a request a
share of that budget and keep a little slack for retries. Measure the real distribution before
you tighten anything.</p>
<h2>Cancellation</h2>
<p>When a timeout fires the future is dropped. Code that holds locks or half-written buffers
across an await point must leave things in a sane state when that happens. Keep critical
sections short and free of awaits.</p>
<p>Read the next guide to see how these timeouts compose with retries.</p>
</main>
</body></html>"#;

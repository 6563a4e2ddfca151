pub mod aggregate;
pub mod collect;
pub mod extract;
pub mod recommendations;
pub mod scoring;

use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::FetchError;
use crate::models::{AnalysisResult, AnalysisTarget, CollectionSettings, RawSignals, ScoringWeights};
use crate::services::fetch_service::PageFetcher;
use crate::utils::{log_score_breakdown, normalize_url};

pub use aggregate::{aggregate, aggregate_pairs};
pub use collect::collect_signals;
pub use recommendations::generate_recommendations;
pub use scoring::{score_all, NEUTRAL_SCORE};

/// The scoring engine: collect signals, score, aggregate, recommend.
/// Holds no per-request state, so one instance serves every request.
#[derive(Debug, Clone)]
pub struct Analyzer {
    weights: ScoringWeights,
    settings: CollectionSettings,
    debug: bool,
}

impl Analyzer {
    pub fn new(weights: ScoringWeights, settings: CollectionSettings) -> Self {
        Analyzer {
            weights,
            settings,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores already-collected signals. Pure apart from debug logging:
    /// the same signals always give the same result.
    pub fn score(&self, url: &str, signals: &RawSignals) -> AnalysisResult {
        let raw = score_all(signals);
        let card = aggregate(&raw, &self.weights);
        let recommendations = generate_recommendations(&card, signals);
        let result = AnalysisResult::from_card(url, card, recommendations);

        if self.debug {
            log_score_breakdown(&result, signals);
        }
        result
    }

    pub async fn analyze(&self, target: AnalysisTarget) -> (AnalysisResult, RawSignals) {
        let url = target.url.clone();
        let signals = collect_signals(Arc::new(target), &self.settings).await;
        let result = self.score(&url, &signals);
        info!("Analysis of {} finished: overall {:.1}", url, result.overall_score);
        (result, signals)
    }

    /// Normalizes `raw_url`, fetches it within `fetch_timeout` and analyzes
    /// the page. Fetch problems fail the whole analysis.
    pub async fn analyze_url<F: PageFetcher>(
        &self,
        fetcher: &F,
        raw_url: &str,
        fetch_timeout: Duration,
    ) -> Result<(AnalysisResult, RawSignals), FetchError> {
        let url = normalize_url(raw_url)?;
        info!("Analyzing {}", url);

        let target = match timeout(fetch_timeout, fetcher.fetch(&url)).await {
            Ok(fetched) => fetched?,
            Err(_) => return Err(FetchError::Timeout(fetch_timeout)),
        };
        Ok(self.analyze(target).await)
    }
}

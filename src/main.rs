use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use webboost::api;
use webboost::models::{AnalysisResponse, AppConfig, AppState, ScoringWeights};
use webboost::services::{Analyzer, HttpFetcher};
use webboost::utils::save_report;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing; `log` records from the library are forwarded
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    let weights = ScoringWeights::standard().context("Scoring weights are invalid")?;
    let analyzer = Analyzer::new(weights, config.collection.clone()).with_debug(config.debug);
    let fetcher = HttpFetcher::new(&config.user_agent, config.fetch_timeout)
        .context("Failed to build HTTP client")?;

    match std::env::args().nth(1) {
        Some(url) => analyze_once(&analyzer, &fetcher, &config, &url).await,
        None => {
            serve(AppState {
                analyzer,
                fetcher,
                config,
            })
            .await
        }
    }
}

/// One-shot CLI run: print the envelope and optionally save it.
async fn analyze_once(analyzer: &Analyzer, fetcher: &HttpFetcher, config: &AppConfig, url: &str) -> Result<()> {
    let outcome = analyzer.analyze_url(fetcher, url, config.fetch_timeout).await;
    let (response, failure) = match outcome {
        Ok((result, signals)) => {
            let signals = config.debug.then_some(signals);
            (AnalysisResponse::completed(result, signals), None)
        }
        Err(e) => (AnalysisResponse::error(e.to_string()), Some(e)),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(dir) = &config.report_dir {
        let path = save_report(dir, url, &response).await?;
        info!("Report saved to {}", path.display());
    }

    match failure {
        Some(e) => Err(e).with_context(|| format!("Analysis of {} failed", url)),
        None => Ok(()),
    }
}

async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = api::router(Arc::new(state));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Server running on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

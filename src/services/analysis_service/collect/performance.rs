use log::warn;
use scraper::Html;
use std::sync::Arc;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, LighthouseReport, LighthouseSettings, PerformanceSignals, TimingSource};
use crate::services::analysis_service::extract::html;
use crate::services::site_audit_service::run_lighthouse;

const RESOURCE_SELECTOR: &str = r#"script[src], link[rel="stylesheet"][href], img[src], iframe[src], video[src], audio[src], source[src]"#;

/// Timing reported by the fetcher, optionally refined by a Lighthouse run.
/// The resource scan parses the page on the blocking pool. A failed
/// probe only costs the Lighthouse fields; without any timing at
/// all the category is missing.
pub async fn collect(
    target: Arc<AnalysisTarget>,
    lighthouse: Option<LighthouseSettings>,
) -> Result<PerformanceSignals, CollectionError> {
    let page = Arc::clone(&target);
    let resources = tokio::task::spawn_blocking(move || resource_count(&page.html))
        .await
        .map_err(|e| CollectionError::Aborted(e.to_string()))?;
    let mut signals = from_timing(&target, resources);

    if let Some(settings) = lighthouse {
        match run_lighthouse(&target.url, &settings).await {
            Ok(report) => merge_lighthouse(&mut signals, &report),
            Err(e) => warn!("Lighthouse unavailable for {}: {}", target.url, e),
        }
    }

    if signals.source == TimingSource::None {
        return Err(CollectionError::MissingData("page timing"));
    }
    Ok(signals)
}

fn from_timing(target: &AnalysisTarget, resource_count: usize) -> PerformanceSignals {
    let timing = &target.timing;
    let source = if timing.is_empty() {
        TimingSource::None
    } else if timing.dom_content_loaded_secs.is_some() {
        TimingSource::BrowserTiming
    } else {
        TimingSource::HttpTiming
    };

    PerformanceSignals {
        load_time_secs: timing.load_time_secs,
        dom_content_loaded_secs: timing.dom_content_loaded_secs,
        first_contentful_paint_ms: timing.first_contentful_paint_ms,
        largest_contentful_paint_ms: timing.largest_contentful_paint_ms,
        lighthouse_score: None,
        page_weight_bytes: target.html.len(),
        resource_count,
        source,
    }
}

fn resource_count(page: &str) -> usize {
    let doc = Html::parse_document(page);
    html::count(&doc, RESOURCE_SELECTOR)
}

fn merge_lighthouse(signals: &mut PerformanceSignals, report: &LighthouseReport) {
    let Some(score) = report.performance_score() else {
        return;
    };
    signals.lighthouse_score = Some(score);
    if let Some(fcp) = report.audit_value("first-contentful-paint") {
        signals.first_contentful_paint_ms = Some(fcp);
    }
    if let Some(lcp) = report.audit_value("largest-contentful-paint") {
        signals.largest_contentful_paint_ms = Some(lcp);
    }
    signals.source = TimingSource::Lighthouse;
}

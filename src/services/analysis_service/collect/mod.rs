//! Signal collection. One task per category, each with its own time budget;
//! a failed category becomes its neutral record instead of failing the run.

pub mod content;
pub mod mobile;
pub mod performance;
pub mod security;
pub mod seo;
pub mod social;

use log::{debug, warn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, Collected, CollectionSettings, RawSignals, SignalCategory};

type SyncCollector<T> = fn(&AnalysisTarget) -> Result<T, CollectionError>;

/// Runs all six collectors concurrently against the shared target and
/// assembles the result once every task has finished or been cut off.
pub async fn collect_signals(target: Arc<AnalysisTarget>, settings: &CollectionSettings) -> RawSignals {
    let budget = settings.category_timeout;

    let (performance, mobile, seo, social, security, content) = futures::join!(
        run_category(
            SignalCategory::Performance,
            settings.performance_timeout(),
            performance::collect(Arc::clone(&target), settings.lighthouse.clone()),
        ),
        run_category(SignalCategory::Mobile, budget, blocking(&target, mobile::collect)),
        run_category(SignalCategory::Seo, budget, blocking(&target, seo::collect)),
        run_category(SignalCategory::Social, budget, blocking(&target, social::collect)),
        run_category(SignalCategory::Security, budget, blocking(&target, security::collect)),
        run_category(SignalCategory::Content, budget, blocking(&target, content::collect)),
    );

    RawSignals {
        performance,
        mobile,
        seo,
        social,
        security,
        content,
    }
}

/// DOM parsing is CPU work; it runs on the blocking pool so the budget can
/// still fire while a large page is being parsed.
fn blocking<T>(
    target: &Arc<AnalysisTarget>,
    collector: SyncCollector<T>,
) -> impl Future<Output = Result<T, CollectionError>> + Send + 'static
where
    T: Send + 'static,
{
    let target = Arc::clone(target);
    async move {
        tokio::task::spawn_blocking(move || collector(&target))
            .await
            .map_err(|e| CollectionError::Aborted(e.to_string()))?
    }
}

/// Spawns one category task under `budget`. Timeouts abort the task; any
/// failure is logged and replaced by the neutral record.
pub async fn run_category<T, F>(category: SignalCategory, budget: Duration, task: F) -> Collected<T>
where
    T: Default + Send + 'static,
    F: Future<Output = Result<T, CollectionError>> + Send + 'static,
{
    let handle = tokio::spawn(task);
    let abort = handle.abort_handle();

    let outcome = match timeout(budget, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(CollectionError::Aborted(join_error.to_string())),
        Err(_) => {
            abort.abort();
            Err(CollectionError::Timeout(budget))
        }
    };

    match outcome {
        Ok(record) => {
            debug!("Collected {} signals", category);
            Collected::ok(record)
        }
        Err(e) => {
            warn!("{} signals unavailable, using neutral defaults: {}", category, e);
            Collected::neutral()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageTiming;

    #[tokio::test]
    async fn slow_category_is_cut_off() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<usize, CollectionError>(7)
        };
        let collected = run_category(SignalCategory::Seo, Duration::from_millis(20), slow).await;
        assert!(!collected.collected);
        assert_eq!(collected.record, 0);
    }

    #[tokio::test]
    async fn panicking_category_is_neutral() {
        let boom = async {
            if true {
                panic!("collector bug");
            }
            Ok::<usize, CollectionError>(1)
        };
        let collected = run_category(SignalCategory::Content, Duration::from_secs(1), boom).await;
        assert!(!collected.collected);
    }

    #[tokio::test]
    async fn failed_category_is_neutral() {
        let failing = async { Err::<usize, _>(CollectionError::MissingData("nothing")) };
        let collected = run_category(SignalCategory::Social, Duration::from_secs(1), failing).await;
        assert_eq!(collected, Collected::neutral());
    }

    #[tokio::test]
    async fn collects_every_category_for_a_complete_target() {
        let page = r#"<html><head><title>Hello there</title>
            <meta name="viewport" content="width=device-width"></head>
            <body><h1>Hello</h1><p>Some words to read.</p></body></html>"#;
        let target = AnalysisTarget::new("https://example.com", page)
            .with_headers([("content-type", "text/html")])
            .with_timing(PageTiming {
                load_time_secs: Some(0.4),
                ..Default::default()
            });

        let signals = collect_signals(Arc::new(target), &CollectionSettings::default()).await;
        assert!(signals.performance.collected);
        assert!(signals.mobile.collected);
        assert!(signals.seo.collected);
        assert!(signals.social.collected);
        assert!(signals.security.collected);
        assert!(signals.content.collected);
        assert!(signals.mobile.record.has_viewport);
    }

    #[tokio::test]
    async fn bare_target_collects_nothing() {
        let target = AnalysisTarget::new("https://example.com", "");
        let signals = collect_signals(Arc::new(target), &CollectionSettings::default()).await;
        assert_eq!(signals, RawSignals::default());
    }
}

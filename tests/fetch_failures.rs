mod common;

use std::time::Duration;

use common::{analyzer, StaticPage, ARTICLE, FETCH_TIMEOUT};
use webboost::error::FetchError;

#[tokio::test]
async fn bad_status_fails_the_analysis() {
    let page = StaticPage::ok(ARTICLE).with_status(404);
    let err = analyzer()
        .analyze_url(&page, "https://example.com/missing", FETCH_TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn invalid_url_fails_before_fetching() {
    let err = analyzer()
        .analyze_url(&StaticPage::ok(ARTICLE), "   ", FETCH_TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl { .. }));
}

#[tokio::test]
async fn slow_fetch_times_out() {
    let page = StaticPage::ok(ARTICLE).with_delay(Duration::from_secs(5));
    let err = analyzer()
        .analyze_url(&page, "https://example.com", Duration::from_millis(50))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout(_)));
}

#[tokio::test]
async fn scheme_is_added_when_missing() {
    let (result, signals) = analyzer()
        .analyze_url(&StaticPage::ok(ARTICLE), "example.com/guides/async-rust-timeouts", FETCH_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(result.url, "https://example.com/guides/async-rust-timeouts");
    assert!(signals.security.record.https);
}

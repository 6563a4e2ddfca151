use log::{debug, info, warn};

use crate::models::{AnalysisResult, RawSignals};
use crate::services::site_audit_service::font_size_histogram;

const RECONSTRUCTION_TOLERANCE: f64 = 0.01;

/// Debug-mode dump of the per-criterion breakdown. Returns whether the
/// contributions add back up to the overall score.
pub fn log_score_breakdown(result: &AnalysisResult, signals: &RawSignals) -> bool {
    info!("Score breakdown for {}", result.url);
    for (criterion, entry) in result.score_breakdown.iter() {
        info!(
            "  {:<20} raw {:>7.2}  weight {:.2}  contribution {:>6.2}",
            criterion.name(),
            entry.raw,
            entry.weight,
            entry.contribution
        );
    }

    info!(
        "  collected: performance={} mobile={} seo={} social={} security={} content={}",
        signals.performance.collected,
        signals.mobile.collected,
        signals.seo.collected,
        signals.social.collected,
        signals.security.collected,
        signals.content.collected
    );

    if let Some(mobile) = signals.mobile.get() {
        debug!("  font sizes px -> count: {:?}", font_size_histogram(&mobile.font_sizes_px));
    }

    let total = result.contribution_sum();
    let matches = (total - result.overall_score).abs() < RECONSTRUCTION_TOLERANCE;
    if matches {
        info!(
            "  sum of contributions {:.2} == overall {:.2}",
            total, result.overall_score
        );
    } else {
        warn!(
            "  sum of contributions {:.2} != overall {:.2}",
            total, result.overall_score
        );
    }
    matches
}

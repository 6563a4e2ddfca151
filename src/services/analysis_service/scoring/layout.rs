use super::curves::{band, flag, saturating};
use super::NEUTRAL_SCORE;
use crate::models::RawSignals;
use crate::services::site_audit_service::compute_sample_stats;

const BASE: f64 = 30.0;
const MOBILE_MAX: f64 = 15.0;
const TYPOGRAPHY_MAX: f64 = 10.0;
const HTTPS_POINTS: f64 = 10.0;

/// Font-size spread (std-dev, px) that still counts as a consistent scale,
/// and the spread at which typography earns nothing.
const CALM_FONT_SPREAD: f64 = 6.0;
const NOISY_FONT_SPREAD: f64 = 12.0;

/// Content drives the score; mobile and security facts add components and
/// fall back to half credit when their category is missing.
pub fn layout_quality(signals: &RawSignals) -> f64 {
    let Some(content) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };

    let mobile = match signals.mobile.get() {
        Some(m) => flag(m.has_viewport, 10.0) + flag(m.handheld_friendly, 3.0) + flag(m.touch_optimized, 2.0),
        None => MOBILE_MAX / 2.0,
    };

    let typography = match signals.mobile.get() {
        Some(m) => {
            let spread = compute_sample_stats(&m.font_sizes_px).map_or(0.0, |s| s.std_dev);
            let consistency = 1.0 - ((spread - CALM_FONT_SPREAD) / (NOISY_FONT_SPREAD - CALM_FONT_SPREAD)).clamp(0.0, 1.0);
            (TYPOGRAPHY_MAX * consistency - m.tiny_font_count as f64 * 2.0).max(0.0)
        }
        None => TYPOGRAPHY_MAX / 2.0,
    };

    let lengths: Vec<f64> = content.paragraph_lengths.iter().map(|n| *n as f64).collect();
    let paragraphs = compute_sample_stats(&lengths).map_or(0.0, |s| band(s.median, 20.0, 120.0, 15.0, 80.0));

    let whitespace = (10.0 - content.crowded_elements as f64).max(0.0);

    let levels_used = content.heading_levels.iter().filter(|n| **n > 0).count();
    let hierarchy = flag(content.heading_levels[0] == 1, 5.0) + flag(levels_used >= 2, 5.0);

    let https = match signals.security.get() {
        Some(s) => flag(s.https, HTTPS_POINTS),
        None => HTTPS_POINTS / 2.0,
    };

    BASE + mobile + typography + saturating(paragraphs, 1.0, 15.0) + whitespace + hierarchy + https
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collected, ContentSignals, MobileSignals, SecuritySignals};

    fn content() -> ContentSignals {
        ContentSignals {
            paragraph_lengths: vec![40, 60, 80],
            heading_levels: [1, 3, 0, 0, 0, 0],
            ..Default::default()
        }
    }

    #[test]
    fn tidy_secure_page_scores_full() {
        let signals = RawSignals {
            content: Collected::ok(content()),
            mobile: Collected::ok(MobileSignals {
                has_viewport: true,
                handheld_friendly: true,
                touch_optimized: true,
                font_sizes_px: vec![16.0, 18.0, 24.0],
                tiny_font_count: 0,
            }),
            security: Collected::ok(SecuritySignals {
                https: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(layout_quality(&signals), 100.0);
    }

    #[test]
    fn missing_security_sits_between_secure_and_insecure() {
        let base = RawSignals {
            content: Collected::ok(content()),
            ..Default::default()
        };
        let secure = RawSignals {
            security: Collected::ok(SecuritySignals {
                https: true,
                ..Default::default()
            }),
            ..base.clone()
        };
        let insecure = RawSignals {
            security: Collected::ok(SecuritySignals::default()),
            ..base.clone()
        };

        let unknown = layout_quality(&base);
        assert!(layout_quality(&insecure) < unknown);
        assert!(unknown < layout_quality(&secure));
    }

    #[test]
    fn tiny_fonts_cost_typography() {
        let mobile = |tiny| {
            RawSignals {
                content: Collected::ok(content()),
                mobile: Collected::ok(MobileSignals {
                    font_sizes_px: vec![14.0, 16.0],
                    tiny_font_count: tiny,
                    ..Default::default()
                }),
                ..Default::default()
            }
        };
        assert_eq!(layout_quality(&mobile(0)) - layout_quality(&mobile(2)), 4.0);
    }
}

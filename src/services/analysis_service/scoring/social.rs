use super::curves::saturating;
use super::NEUTRAL_SCORE;
use crate::models::RawSignals;

/// Presence across platforms and social proof. Not capped; the aggregator
/// clamps heavily social pages to 100.
pub fn social_integration(signals: &RawSignals) -> f64 {
    let Some(s) = signals.social.get() else {
        return NEUTRAL_SCORE;
    };

    s.platforms.len() as f64 * 10.0
        + s.share_buttons as f64 * 3.0
        + saturating(s.open_graph_tags as f64, 4.0, 20.0)
        + saturating(s.twitter_card_tags as f64, 2.0, 10.0)
        + saturating(s.share_counts as f64, 2.0, 10.0)
        + saturating(s.follower_counts as f64, 2.0, 10.0)
        + saturating(s.testimonials as f64, 3.0, 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collected, SocialSignals};

    #[test]
    fn raw_score_can_exceed_100() {
        let signals = RawSignals {
            social: Collected::ok(SocialSignals {
                platforms: ["facebook", "instagram", "linkedin", "twitter", "youtube"]
                    .map(String::from)
                    .to_vec(),
                share_buttons: 20,
                open_graph_tags: 6,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(social_integration(&signals), 130.0);
    }

    #[test]
    fn empty_social_record_scores_zero() {
        let signals = RawSignals {
            social: Collected::ok(SocialSignals::default()),
            ..Default::default()
        };
        assert_eq!(social_integration(&signals), 0.0);
    }
}

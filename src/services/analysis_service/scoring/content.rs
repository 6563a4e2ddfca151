//! Criteria that read only the content category.

use super::curves::saturating;
use super::NEUTRAL_SCORE;
use crate::models::{RawSignals, ReadabilityIndices};

const MIN_READABLE_WORDS: usize = 20;

/// Mean of the six readability indices mapped to 0-100. Reading ease is
/// taken as is; each grade level costs 5 points. An index at or below zero
/// did not compute and is left out.
pub fn readability(signals: &RawSignals) -> f64 {
    let Some(c) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };
    if c.prose_word_count < MIN_READABLE_WORDS {
        return NEUTRAL_SCORE;
    }
    normalized_readability(&c.readability)
}

fn normalized_readability(r: &ReadabilityIndices) -> f64 {
    let grade = |g: f64| (100.0 - g * 5.0).max(0.0);
    let normalized: Vec<f64> = [
        (r.flesch_reading_ease, r.flesch_reading_ease.min(100.0)),
        (r.flesch_kincaid_grade, grade(r.flesch_kincaid_grade)),
        (r.gunning_fog, grade(r.gunning_fog)),
        (r.smog_index, grade(r.smog_index)),
        (r.automated_readability, grade(r.automated_readability)),
        (r.coleman_liau, grade(r.coleman_liau)),
    ]
    .into_iter()
    .filter(|(raw, _)| *raw > 0.0)
    .map(|(_, points)| points)
    .collect();

    if normalized.is_empty() {
        return NEUTRAL_SCORE;
    }
    normalized.iter().sum::<f64>() / normalized.len() as f64
}

/// Depth, structure, media and sourcing.
pub fn informativeness(signals: &RawSignals) -> f64 {
    let Some(c) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };

    let depth = saturating(c.word_count as f64, 0.01, 30.0);
    let structure = saturating(c.heading_count as f64, 2.0, 25.0);
    let media = saturating((c.image_count + c.embedded_media) as f64, 4.0, 20.0);
    let sourcing = saturating(
        c.citation_count as f64 * 2.0 + c.reference_sections as f64 * 5.0,
        1.0,
        25.0,
    );
    depth + structure + media + sourcing
}

pub fn engagement(signals: &RawSignals) -> f64 {
    let Some(c) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };

    let skimmable = c.heading_count as f64 * 1.5
        + c.emphasis_count as f64 * 0.5
        + c.blockquote_count as f64 * 2.0
        + c.images_with_alt as f64;

    20.0 + saturating(c.question_count as f64, 3.0, 15.0)
        + saturating(c.cta_count as f64, 4.0, 15.0)
        + saturating(c.list_count as f64, 5.0, 20.0)
        + saturating((c.positive_words + c.negative_words) as f64, 1.5, 15.0)
        + saturating(skimmable, 1.0, 15.0)
}

/// Vocabulary variety, research language and first-hand voice, minus
/// stock phrases.
pub fn uniqueness(signals: &RawSignals) -> f64 {
    let Some(c) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };

    let variety = if c.long_word_count == 0 {
        0.0
    } else {
        saturating(c.distinct_long_words as f64 / c.long_word_count as f64, 40.0, 30.0)
    };

    30.0 + variety
        + saturating(c.research_words as f64, 3.0, 15.0)
        + saturating(c.first_person_words as f64, 0.8, 15.0)
        + saturating(c.primary_research_words as f64, 2.0, 10.0)
        - saturating(c.boilerplate_phrases as f64, 5.0, 20.0)
}

/// Penalties only. A page with heavy ads can go below zero; the aggregator
/// clamps.
pub fn ad_experience(signals: &RawSignals) -> f64 {
    let Some(c) = signals.content.get() else {
        return NEUTRAL_SCORE;
    };

    let ads = c.ad_indicators as f64;
    let ads_per_thousand = ads * 1000.0 / c.word_count.max(1) as f64;

    100.0
        - saturating(ads, 5.0, 50.0)
        - saturating(ads_per_thousand, 2.0, 20.0)
        - c.ad_placement.clamp(0.0, 30.0)
        - saturating(c.overlay_count as f64, 10.0, 30.0)
        - saturating(c.autoplay_media as f64, 15.0, 30.0)
}

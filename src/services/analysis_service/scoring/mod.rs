//! One pure function per criterion. Each reads only `RawSignals` and
//! returns a raw score; clamping to 0-100 happens in the aggregator.
//!
//! Every criterion has a primary category. When it was not collected the
//! criterion scores `NEUTRAL_SCORE`; facts from a missing secondary category
//! earn half of their component's points.

pub mod content;
pub mod curves;
pub mod layout;
pub mod seo;
pub mod social;

use crate::models::{Criterion, CriterionMap, RawSignals};

pub const NEUTRAL_SCORE: f64 = 50.0;

pub use content::{ad_experience, engagement, informativeness, readability, uniqueness};
pub use layout::layout_quality;
pub use seo::{discoverability, seo_keywords};
pub use social::social_integration;

pub fn score(criterion: Criterion, signals: &RawSignals) -> f64 {
    match criterion {
        Criterion::Readability => readability(signals),
        Criterion::Informativeness => informativeness(signals),
        Criterion::Engagement => engagement(signals),
        Criterion::Uniqueness => uniqueness(signals),
        Criterion::LayoutQuality => layout_quality(signals),
        Criterion::Discoverability => discoverability(signals),
        Criterion::SeoKeywords => seo_keywords(signals),
        Criterion::AdExperience => ad_experience(signals),
        Criterion::SocialIntegration => social_integration(signals),
    }
}

/// Raw scores for all nine criteria.
pub fn score_all(signals: &RawSignals) -> CriterionMap<f64> {
    CriterionMap::from_fn(|criterion| score(criterion, signals))
}

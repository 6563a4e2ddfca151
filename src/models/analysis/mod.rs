pub mod criterion;
pub mod criterion_map;
pub mod result;
pub mod signals;
pub mod stats;
pub mod target;
pub mod weights;

pub use criterion::Criterion;
pub use criterion_map::CriterionMap;
pub use result::{clamp_score, AnalysisResult, CriterionScore, ScoreCard};
pub use signals::{
    Collected, ContentSignals, MobileSignals, PerformanceSignals, RawSignals, ReadabilityIndices,
    SecuritySignals, SeoSignals, SignalCategory, SocialSignals, TimingSource,
};
pub use stats::SampleStats;
pub use target::{AnalysisTarget, PageTiming};
pub use weights::ScoringWeights;

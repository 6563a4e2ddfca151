use crate::error::ValidationError;
use crate::models::{clamp_score, CriterionMap, CriterionScore, ScoreCard, ScoringWeights};

/// Clamps each raw score, weights it and sums the contributions. Total over
/// any input: NaN and out-of-range raw scores are clamped like the rest.
pub fn aggregate(raw: &CriterionMap<f64>, weights: &ScoringWeights) -> ScoreCard {
    let score_breakdown = raw.map(|criterion, raw| {
        let weight = weights.weight(criterion);
        CriterionScore {
            criterion,
            raw: *raw,
            weight,
            contribution: clamp_score(*raw) * weight,
        }
    });

    let total: f64 = score_breakdown.values().map(|s| s.contribution).sum();

    ScoreCard {
        overall_score: clamp_score(total),
        scores: score_breakdown.map(|_, s| s.clamped()),
        score_breakdown,
    }
}

/// Same as `aggregate`, for scores keyed by criterion name.
pub fn aggregate_pairs<K, I>(raw: I, weights: &ScoringWeights) -> Result<ScoreCard, ValidationError>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, f64)>,
{
    let raw = CriterionMap::try_from_pairs(raw)?;
    Ok(aggregate(&raw, weights))
}

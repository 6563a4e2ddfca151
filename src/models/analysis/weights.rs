use serde::Serialize;

use crate::error::ValidationError;
use crate::models::analysis::criterion::Criterion;
use crate::models::analysis::criterion_map::CriterionMap;

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fixed criterion weights. Construct once at startup and pass it to the
/// aggregator; the constructor is the only place the sum is checked.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringWeights(CriterionMap<f64>);

impl ScoringWeights {
    pub fn new(weights: CriterionMap<f64>) -> Result<Self, ValidationError> {
        for (criterion, weight) in weights.iter() {
            if *weight < 0.0 || !weight.is_finite() {
                return Err(ValidationError::NegativeWeight {
                    criterion,
                    weight: *weight,
                });
            }
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSum { sum });
        }
        Ok(ScoringWeights(weights))
    }

    pub fn standard() -> Result<Self, ValidationError> {
        Self::new(CriterionMap::from_fn(|criterion| match criterion {
            Criterion::Readability => 0.15,
            Criterion::Informativeness => 0.20,
            Criterion::Engagement => 0.15,
            Criterion::Uniqueness => 0.15,
            Criterion::LayoutQuality => 0.10,
            Criterion::Discoverability => 0.10,
            Criterion::SeoKeywords => 0.05,
            Criterion::AdExperience => 0.05,
            Criterion::SocialIntegration => 0.05,
        }))
    }

    pub fn weight(&self, criterion: Criterion) -> f64 {
        *self.0.get(criterion)
    }

    pub fn as_map(&self) -> &CriterionMap<f64> {
        &self.0
    }
}

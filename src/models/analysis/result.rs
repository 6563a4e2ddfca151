use serde::Serialize;

use crate::models::analysis::criterion::Criterion;
use crate::models::analysis::criterion_map::CriterionMap;

// One criterion's share of the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionScore {
    #[serde(skip)]
    pub criterion: Criterion,
    pub raw: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl CriterionScore {
    pub fn clamped(&self) -> f64 {
        clamp_score(self.raw)
    }

    /// Points left on the table, weighted. Drives recommendation ranking.
    pub fn impact(&self) -> f64 {
        (100.0 - self.clamped()) * self.weight
    }
}

pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub overall_score: f64,
    pub scores: CriterionMap<f64>,
    pub score_breakdown: CriterionMap<CriterionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub overall_score: f64,
    pub scores: CriterionMap<f64>,
    pub score_breakdown: CriterionMap<CriterionScore>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn from_card(url: impl Into<String>, card: ScoreCard, recommendations: Vec<String>) -> Self {
        AnalysisResult {
            url: url.into(),
            overall_score: card.overall_score,
            scores: card.scores,
            score_breakdown: card.score_breakdown,
            recommendations,
        }
    }

    pub fn contribution_sum(&self) -> f64 {
        self.score_breakdown.values().map(|b| b.contribution).sum()
    }
}

use std::time::Duration;

use thiserror::Error;

use crate::models::Criterion;

/// Fatal for the whole analysis: no page, no score.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("page unreachable: {0}")]
    Unreachable(String),
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Local to one signal category. Never leaves the orchestrator.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("missing data: {0}")]
    MissingData(&'static str),
    #[error("probe failed: {0}")]
    Probe(String),
    #[error("task aborted: {0}")]
    Aborted(String),
}

/// Programming-contract violations. Raised once at startup, or when untyped
/// score input reaches the aggregator.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
    #[error("weight for {criterion} must be non-negative, got {weight}")]
    NegativeWeight { criterion: Criterion, weight: f64 },
    #[error("missing score for criterion {0}")]
    MissingCriterion(Criterion),
    #[error("unknown criterion {0}")]
    UnknownCriterion(String),
}

impl From<std::io::Error> for CollectionError {
    fn from(e: std::io::Error) -> Self {
        CollectionError::Probe(e.to_string())
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(e: serde_json::Error) -> Self {
        CollectionError::Parse(e.to_string())
    }
}

/// Timeouts are classified by the fetcher, which knows its budget.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FetchError::Unreachable(e.to_string()),
        }
    }
}

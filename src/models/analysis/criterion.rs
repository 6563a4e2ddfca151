use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// The nine quality dimensions a page is scored on
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Readability,
    Informativeness,
    Engagement,
    Uniqueness,
    LayoutQuality,
    Discoverability,
    SeoKeywords,
    AdExperience,
    SocialIntegration,
}

impl Criterion {
    pub const COUNT: usize = 9;

    pub const ALL: [Criterion; Criterion::COUNT] = [
        Criterion::Readability,
        Criterion::Informativeness,
        Criterion::Engagement,
        Criterion::Uniqueness,
        Criterion::LayoutQuality,
        Criterion::Discoverability,
        Criterion::SeoKeywords,
        Criterion::AdExperience,
        Criterion::SocialIntegration,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Readability => "readability",
            Criterion::Informativeness => "informativeness",
            Criterion::Engagement => "engagement",
            Criterion::Uniqueness => "uniqueness",
            Criterion::LayoutQuality => "layout_quality",
            Criterion::Discoverability => "discoverability",
            Criterion::SeoKeywords => "seo_keywords",
            Criterion::AdExperience => "ad_experience",
            Criterion::SocialIntegration => "social_integration",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ValidationError::UnknownCriterion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_declaration_order() {
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), i);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for criterion in Criterion::ALL {
            assert_eq!(criterion.name().parse::<Criterion>(), Ok(criterion));
        }
        assert_eq!(
            "layout".parse::<Criterion>(),
            Err(ValidationError::UnknownCriterion("layout".to_string()))
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Criterion::SeoKeywords).unwrap();
        assert_eq!(json, "\"seo_keywords\"");
    }
}

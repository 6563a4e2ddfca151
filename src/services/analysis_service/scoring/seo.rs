//! Criteria read from the seo category.

use super::curves::{band, flag, saturating};
use super::NEUTRAL_SCORE;
use crate::models::RawSignals;

/// How easily a visitor or crawler finds the rest of the site from here.
pub fn discoverability(signals: &RawSignals) -> f64 {
    let Some(seo) = signals.seo.get() else {
        return NEUTRAL_SCORE;
    };

    let total_links = seo.internal_links + seo.external_links;
    let linking = if total_links == 0 {
        0.0
    } else {
        let ratio = seo.internal_links as f64 / total_links as f64;
        if ratio >= 0.6 {
            15.0
        } else if ratio >= 0.4 {
            10.0
        } else {
            5.0
        }
    };

    flag(seo.has_canonical, 15.0)
        + flag(seo.sitemap_hint, 10.0)
        + linking
        + saturating(seo.nav_count as f64, 5.0, 15.0)
        + flag(seo.has_search, 10.0)
        + flag(seo.has_breadcrumbs, 10.0)
        + saturating(seo.featured_sections as f64, 3.0, 10.0)
        + seo.category_organization.clamp(0.0, 15.0)
}

/// On-page keyword and metadata hygiene.
pub fn seo_keywords(signals: &RawSignals) -> f64 {
    let Some(seo) = signals.seo.get() else {
        return NEUTRAL_SCORE;
    };

    let title = seo
        .title_length
        .map_or(0.0, |len| band(len as f64, 30.0, 60.0, 25.0, 30.0));
    let description = seo
        .meta_description_length
        .map_or(0.0, |len| band(len as f64, 120.0, 160.0, 25.0, 60.0));
    let density = if (1.0..=3.0).contains(&seo.keyword_density) {
        10.0
    } else if (0.5..=4.0).contains(&seo.keyword_density) {
        5.0
    } else {
        0.0
    };

    title
        + description
        + flag(seo.h1_count == 1, 10.0)
        + saturating(seo.keywords_in_headings as f64, 5.0, 10.0)
        + density
        + saturating(seo.structured_data_blocks as f64, 5.0, 5.0)
        + seo.url_structure_score.clamp(0.0, 10.0)
        + saturating(seo.date_mentions as f64, 2.0, 5.0)
        - flag(seo.robots_noindex, 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collected, SeoSignals};

    fn with_seo(seo: SeoSignals) -> RawSignals {
        RawSignals {
            seo: Collected::ok(seo),
            ..Default::default()
        }
    }

    #[test]
    fn well_sized_title_and_description() {
        let signals = with_seo(SeoSignals {
            title_length: Some(45),
            meta_description_length: Some(140),
            h1_count: 1,
            keywords_in_headings: 2,
            keyword_density: 2.0,
            url_structure_score: 7.0,
            ..Default::default()
        });
        let score = seo_keywords(&signals);
        assert!(score >= 70.0, "score {}", score);
        assert_eq!(score, 87.0);
    }

    #[test]
    fn noindex_can_push_below_zero() {
        let signals = with_seo(SeoSignals {
            robots_noindex: true,
            ..Default::default()
        });
        assert_eq!(seo_keywords(&signals), -20.0);
    }

    #[test]
    fn internal_link_ratio_tiers() {
        let score = |internal, external| {
            discoverability(&with_seo(SeoSignals {
                internal_links: internal,
                external_links: external,
                ..Default::default()
            }))
        };
        assert_eq!(score(0, 0), 0.0);
        assert_eq!(score(6, 4), 15.0);
        assert_eq!(score(4, 6), 10.0);
        assert_eq!(score(1, 9), 5.0);
    }

    #[test]
    fn well_connected_page() {
        let signals = with_seo(SeoSignals {
            has_canonical: true,
            sitemap_hint: true,
            internal_links: 30,
            external_links: 5,
            nav_count: 2,
            has_search: true,
            has_breadcrumbs: true,
            featured_sections: 2,
            category_organization: 12.0,
            ..Default::default()
        });
        assert_eq!(discoverability(&signals), 88.0);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Performance,
    Mobile,
    Seo,
    Social,
    Security,
    Content,
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalCategory::Performance => "performance",
            SignalCategory::Mobile => "mobile",
            SignalCategory::Seo => "seo",
            SignalCategory::Social => "social",
            SignalCategory::Security => "security",
            SignalCategory::Content => "content",
        };
        write!(f, "{}", name)
    }
}

/// A category record plus whether it was actually collected. When
/// `collected` is false the record holds its `Default` (neutral) values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collected<T> {
    pub collected: bool,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Default> Collected<T> {
    pub fn ok(record: T) -> Self {
        Collected {
            collected: true,
            record,
        }
    }

    pub fn neutral() -> Self {
        Collected {
            collected: false,
            record: T::default(),
        }
    }

    /// The record if it was collected.
    pub fn get(&self) -> Option<&T> {
        self.collected.then_some(&self.record)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimingSource {
    #[default]
    None,
    HttpTiming,
    BrowserTiming,
    Lighthouse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSignals {
    pub load_time_secs: Option<f64>,
    pub dom_content_loaded_secs: Option<f64>,
    pub first_contentful_paint_ms: Option<f64>,
    pub largest_contentful_paint_ms: Option<f64>,
    /// Lighthouse performance category, 0-100.
    pub lighthouse_score: Option<f64>,
    pub page_weight_bytes: usize,
    pub resource_count: usize,
    pub source: TimingSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileSignals {
    pub has_viewport: bool,
    pub handheld_friendly: bool,
    pub touch_optimized: bool,
    pub font_sizes_px: Vec<f64>,
    pub tiny_font_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSignals {
    pub title_length: Option<usize>,
    pub meta_description_length: Option<usize>,
    pub h1_count: usize,
    pub has_canonical: bool,
    pub sitemap_hint: bool,
    pub robots_noindex: bool,
    pub structured_data_blocks: usize,
    pub top_keywords: Vec<String>,
    /// Share of words taken by the top keywords, in percent.
    pub keyword_density: f64,
    pub keywords_in_headings: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub has_search: bool,
    pub nav_count: usize,
    pub has_breadcrumbs: bool,
    pub featured_sections: usize,
    pub category_organization: f64,
    pub date_mentions: usize,
    pub url_structure_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialSignals {
    pub platforms: Vec<String>,
    pub share_buttons: usize,
    pub open_graph_tags: usize,
    pub twitter_card_tags: usize,
    pub share_counts: usize,
    pub follower_counts: usize,
    pub testimonials: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecuritySignals {
    pub https: bool,
    pub hsts: bool,
    pub content_security_policy: bool,
    pub content_type_options: bool,
    pub frame_options: bool,
    pub referrer_policy: bool,
    pub mixed_content_refs: usize,
}

/// Classic readability formulas over the prose text. Flesch reading ease
/// runs 0-100 with higher being easier; the others are US school grades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityIndices {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability: f64,
    pub coleman_liau: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSignals {
    pub word_count: usize,
    /// Words inside paragraphs, list items and quotes. The readability
    /// ratios are taken over these.
    pub prose_word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Prose words of three or more syllables.
    pub complex_word_count: usize,
    /// Letters and digits in prose words.
    pub letter_count: usize,
    pub readability: ReadabilityIndices,
    /// Words of four or more letters, and how many of them are distinct.
    pub long_word_count: usize,
    pub distinct_long_words: usize,
    pub heading_count: usize,
    /// Count of h1..h6, index 0 is h1.
    pub heading_levels: [usize; 6],
    pub image_count: usize,
    pub images_with_alt: usize,
    pub embedded_media: usize,
    pub link_count: usize,
    pub citation_count: usize,
    pub reference_sections: usize,
    pub list_count: usize,
    pub list_items: usize,
    pub emphasis_count: usize,
    pub blockquote_count: usize,
    pub question_count: usize,
    pub exclamation_count: usize,
    pub cta_count: usize,
    pub positive_words: usize,
    pub negative_words: usize,
    pub research_words: usize,
    pub first_person_words: usize,
    pub primary_research_words: usize,
    pub boilerplate_phrases: usize,
    pub paragraph_lengths: Vec<usize>,
    pub crowded_elements: usize,
    pub ad_indicators: usize,
    pub ad_placement: f64,
    pub overlay_count: usize,
    pub autoplay_media: usize,
}

/// Everything the scoring functions may look at. Fully assembled before any
/// scoring runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSignals {
    pub performance: Collected<PerformanceSignals>,
    pub mobile: Collected<MobileSignals>,
    pub seo: Collected<SeoSignals>,
    pub social: Collected<SocialSignals>,
    pub security: Collected<SecuritySignals>,
    pub content: Collected<ContentSignals>,
}

impl RawSignals {
    pub fn collected(&self, category: SignalCategory) -> bool {
        match category {
            SignalCategory::Performance => self.performance.collected,
            SignalCategory::Mobile => self.mobile.collected,
            SignalCategory::Seo => self.seo.collected,
            SignalCategory::Social => self.social.collected,
            SignalCategory::Security => self.security.collected,
            SignalCategory::Content => self.content.collected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_signals_are_all_uncollected() {
        let signals = RawSignals::default();
        for category in [
            SignalCategory::Performance,
            SignalCategory::Mobile,
            SignalCategory::Seo,
            SignalCategory::Social,
            SignalCategory::Security,
            SignalCategory::Content,
        ] {
            assert!(!signals.collected(category), "{} collected", category);
        }
        assert!(signals.security.get().is_none());
        assert!(!signals.security.record.https);
    }

    #[test]
    fn collected_flag_is_flattened_next_to_record() {
        let security = Collected::ok(SecuritySignals {
            https: true,
            ..Default::default()
        });
        let value = serde_json::to_value(&security).unwrap();
        assert_eq!(value["collected"], true);
        assert_eq!(value["https"], true);
    }
}

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, ContentSignals};
use crate::services::analysis_service::extract::html::{self, parse_document};
use crate::services::analysis_service::extract::text;

const AD_INDICATORS: &[&str] = &[
    "googleads",
    "doubleclick",
    "adsbygoogle",
    "advertisement",
    "banner-ad",
    "ad-container",
    "ad-unit",
    "ad-slot",
    "ad-wrapper",
    "sponsored",
];

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)reference|citation|bibliography|footnotes|sources")
        .expect("Failed to compile reference section regex")
});
static CONTENT_AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)content|article|post").expect("Failed to compile content area regex")
});
static OVERLAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)popup|pop-up|modal|overlay|interstitial")
        .expect("Failed to compile overlay regex")
});
static CROWDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(margin|padding)\s*:\s*0(px)?\s*(;|$)").expect("Failed to compile crowded regex")
});

pub fn collect(target: &AnalysisTarget) -> Result<ContentSignals, CollectionError> {
    let doc = parse_document(&target.html)?;
    let text = html::visible_text(&doc);
    let blocks = html::prose_blocks(&doc);
    let stats = text::text_stats(&blocks);
    let (long_word_count, distinct_long_words) = text::long_words(&text);
    let vocab = text::vocabulary(&text);
    let heading_levels = html::heading_levels(&doc);

    let lowered = target.html.to_lowercase();
    let ad_indicators = AD_INDICATORS
        .iter()
        .map(|needle| lowered.matches(needle).count())
        .sum();

    Ok(ContentSignals {
        word_count: text::words(&text).len(),
        prose_word_count: stats.words,
        sentence_count: stats.sentences,
        syllable_count: stats.syllables,
        complex_word_count: stats.complex_words,
        letter_count: stats.letters,
        readability: text::readability_indices(&stats),
        long_word_count,
        distinct_long_words,
        heading_count: heading_levels.iter().sum(),
        heading_levels,
        image_count: html::count(&doc, "img"),
        images_with_alt: html::count(&doc, "img[alt]"),
        embedded_media: html::count(&doc, "video, audio, iframe, embed, object"),
        link_count: html::count(&doc, "a[href]"),
        citation_count: text::citation_count(&text)
            + html::count(&doc, "cite, blockquote[cite], a[href^='#fn'], a[href^='#ref'], a[href^='#cite']"),
        reference_sections: html::count_class_or_id(&doc, &REFERENCE_RE),
        list_count: html::count(&doc, "ul, ol"),
        list_items: html::count(&doc, "li"),
        emphasis_count: html::count(&doc, "b, strong, i, em"),
        blockquote_count: html::count(&doc, "blockquote"),
        question_count: vocab.questions,
        exclamation_count: vocab.exclamations,
        cta_count: vocab.cta,
        positive_words: vocab.positive,
        negative_words: vocab.negative,
        research_words: vocab.research,
        first_person_words: vocab.first_person,
        primary_research_words: vocab.primary_research,
        boilerplate_phrases: vocab.boilerplate,
        paragraph_lengths: html::paragraph_lengths(&doc),
        crowded_elements: count_crowded(&doc),
        ad_indicators,
        ad_placement: ad_placement(&doc),
        overlay_count: html::count_class_or_id(&doc, &OVERLAY_RE),
        autoplay_media: html::count(&doc, "video[autoplay], audio[autoplay]"),
    })
}

fn count_crowded(doc: &Html) -> usize {
    doc.select(&html::STYLED)
        .filter(|el| el.value().attr("style").is_some_and(|s| CROWDED_RE.is_match(s)))
        .count()
}

fn contains_ad(markup: &str) -> bool {
    AD_INDICATORS.iter().any(|needle| markup.contains(needle))
}

/// Intrusiveness of ad placement, 0-30: ads near the top of the body (10
/// each) and ads inside content areas (5 each).
fn ad_placement(doc: &Html) -> f64 {
    let body = html::body(doc).inner_html().to_lowercase();
    let top = html::prefix(&body, 1000);
    let mut placement = AD_INDICATORS
        .iter()
        .filter(|needle| top.contains(*needle))
        .count() as f64
        * 10.0;

    for area in doc.select(&html::CLASS_OR_ID) {
        let is_content_area = area
            .value()
            .attr("class")
            .is_some_and(|c| CONTENT_AREA_RE.is_match(c));
        if is_content_area && contains_ad(&area.inner_html().to_lowercase()) {
            placement += 5.0;
        }
    }
    placement.min(30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_structure_and_vocabulary() {
        let page = r#"<html><body><article class="post-content">
            <h1>Why we measured everything</h1>
            <h2>Setup</h2><h2>Results</h2>
            <p>We surveyed forty teams. According to Smith's 2021 report, most teams love fast feedback.</p>
            <p>Do you agree? <strong>Subscribe</strong> for more [1].</p>
            <ul><li>One</li><li>Two</li></ul>
            <img src="a.png" alt="chart"><img src="b.png">
            <div class="references">Sources</div>
        </article></body></html>"#;
        let signals = collect(&AnalysisTarget::new("https://example.com/post", page)).unwrap();

        assert_eq!(signals.heading_levels, [1, 2, 0, 0, 0, 0]);
        assert_eq!(signals.heading_count, 3);
        assert_eq!(signals.image_count, 2);
        assert_eq!(signals.images_with_alt, 1);
        assert_eq!(signals.list_count, 1);
        assert_eq!(signals.list_items, 2);
        assert_eq!(signals.question_count, 1);
        assert_eq!(signals.cta_count, 1);
        assert_eq!(signals.reference_sections, 1);
        assert_eq!(signals.citation_count, 2);
        assert_eq!(signals.paragraph_lengths.len(), 2);
        assert!(signals.primary_research_words >= 1);
        assert_eq!(signals.ad_indicators, 0);
    }

    #[test]
    fn detects_ads_and_overlays() {
        let page = r#"<html><body>
            <div class="adsbygoogle"></div>
            <div id="newsletter-modal">Join!</div>
            <div class="article-body"><div class="ad-slot"></div><p>Text</p></div>
            <video autoplay src="promo.mp4"></video>
        </body></html>"#;
        let signals = collect(&AnalysisTarget::new("https://example.com", page)).unwrap();

        assert_eq!(signals.ad_indicators, 2);
        assert_eq!(signals.overlay_count, 1);
        assert_eq!(signals.autoplay_media, 1);
        assert_eq!(signals.ad_placement, 25.0);
    }

    #[test]
    fn nested_prose_is_counted_once() {
        let page = r#"<html><body>
            <blockquote><p>one two three four five.</p></blockquote>
            <ul><li><p>six seven eight.</p></li></ul>
        </body></html>"#;
        let signals = collect(&AnalysisTarget::new("https://example.com", page)).unwrap();

        assert_eq!(signals.word_count, 8);
        assert_eq!(signals.prose_word_count, 8);
        assert_eq!(signals.sentence_count, 2);
        let expected = text::TextStats {
            words: 8,
            sentences: 2,
            syllables: 9,
            complex_words: 0,
            letters: 32,
        };
        assert_eq!(signals.readability, text::readability_indices(&expected));
    }

    #[test]
    fn empty_page_is_missing_data() {
        let result = collect(&AnalysisTarget::new("https://example.com", ""));
        assert!(matches!(result, Err(CollectionError::MissingData(_))));
    }
}

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, SeoSignals};
use crate::services::analysis_service::extract::html::{self, parse_document};
use crate::services::analysis_service::extract::text;
use crate::utils::{domain_of, is_internal_link, url_structure_score};

const KEYWORD_LIMIT: usize = 10;
const HEADING_KEYWORDS: usize = 5;
const MAX_FEATURED: usize = 5;

static BREADCRUMB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)breadcrumb").expect("Failed to compile breadcrumb regex"));
static FEATURED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)featured|popular|trending|recommended|editor.pick|most.read|top.posts|best.of")
        .expect("Failed to compile featured regex")
});
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)category").expect("Failed to compile category regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tag").expect("Failed to compile tag regex"));
static FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)filter|sort").expect("Failed to compile filter regex"));

pub fn collect(target: &AnalysisTarget) -> Result<SeoSignals, CollectionError> {
    let doc = parse_document(&target.html)?;
    let text = html::visible_text(&doc);
    let (top_keywords, keyword_density) = text::keyword_stats(&text, KEYWORD_LIMIT);

    let headings = html::heading_texts(&doc).join(" ").to_lowercase();
    let keywords_in_headings = top_keywords
        .iter()
        .take(HEADING_KEYWORDS)
        .filter(|k| headings.contains(k.as_str()))
        .count();

    let (internal_links, external_links) = link_split(&doc, &target.url);
    let robots = html::meta_content(&doc, "robots").unwrap_or("").to_ascii_lowercase();

    Ok(SeoSignals {
        title_length: title_length(&doc),
        meta_description_length: html::meta_content(&doc, "description")
            .map(|d| d.trim().chars().count()),
        h1_count: html::count(&doc, "h1"),
        has_canonical: html::has_link_rel(&doc, "canonical"),
        sitemap_hint: html::has_link_rel(&doc, "sitemap")
            || html::hrefs(&doc)
                .iter()
                .any(|h| h.to_ascii_lowercase().contains("sitemap")),
        robots_noindex: robots.contains("noindex"),
        structured_data_blocks: html::count(&doc, r#"script[type="application/ld+json"]"#),
        top_keywords,
        keyword_density,
        keywords_in_headings,
        internal_links,
        external_links,
        has_search: html::count(&doc, r#"input[type="search"], [role="search"]"#) > 0,
        nav_count: html::count(&doc, "nav"),
        has_breadcrumbs: html::count_class_or_id(&doc, &BREADCRUMB_RE) > 0
            || html::count(&doc, r#"[aria-label="breadcrumb"], [aria-label="Breadcrumb"]"#) > 0,
        featured_sections: html::count_class(&doc, &FEATURED_RE).min(MAX_FEATURED),
        category_organization: category_organization(&doc),
        date_mentions: text::date_mentions(&text) + html::count(&doc, "time[datetime]"),
        url_structure_score: url_structure_score(&target.url),
    })
}

fn title_length(doc: &Html) -> Option<usize> {
    let sel = scraper::Selector::parse("title").ok()?;
    doc.select(&sel)
        .next()
        .map(|t| html::element_text(t).trim().chars().count())
}

/// Internal and external link counts. Fragment-only, mail, phone and
/// script links are not navigation and are skipped.
fn link_split(doc: &Html, url: &str) -> (usize, usize) {
    let domain = domain_of(url);
    let mut internal = 0;
    let mut external = 0;
    for href in html::hrefs(doc) {
        let href = href.trim();
        let lowered = href.to_ascii_lowercase();
        if href.is_empty()
            || href == "#"
            || ["mailto:", "tel:", "javascript:"].iter().any(|p| lowered.starts_with(p))
        {
            continue;
        }
        if is_internal_link(href, domain.as_deref()) {
            internal += 1;
        } else {
            external += 1;
        }
    }
    (internal, external)
}

/// 0-25: category classes (2 each, up to 10), tag classes (1 each, up to 5)
/// and filter/sort controls (3 each, up to 10).
fn category_organization(doc: &Html) -> f64 {
    let categories = (html::count_class(doc, &CATEGORY_RE) * 2).min(10);
    let tags = html::count_class(doc, &TAG_RE).min(5);
    let filters = (html::count_class(doc, &FILTER_RE) * 3).min(10);
    (categories + tags + filters) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title>Practical async patterns in Rust</title>
        <meta name="description" content="A walk through timeouts and cancellation.">
        <meta name="robots" content="index, follow">
        <link rel="canonical" href="https://example.com/async-patterns">
        <script type="application/ld+json">{"@type": "Article"}</script>
        </head><body>
        <nav><a href="/">Home</a><a href="/blog">Blog</a></nav>
        <div class="breadcrumbs"><a href="/blog/rust">Rust</a></div>
        <form role="search"><input type="search" name="q"></form>
        <h1>Async timeouts</h1>
        <p>Timeouts keep async services honest. Timeouts bound latency.
        Published 2024-03-01.</p>
        <a href="https://docs.rs/tokio">tokio</a>
        <a href="mailto:me@example.com">mail</a>
        <a href="/sitemap.xml">Sitemap</a>
        <ul class="category-list"><li class="tag">rust</li></ul>
        <aside class="popular-posts"></aside>
    </body></html>"#;

    #[test]
    fn collects_on_page_seo() {
        let signals = collect(&AnalysisTarget::new("https://example.com/async-patterns", PAGE)).unwrap();
        assert_eq!(signals.title_length, Some(32));
        assert_eq!(signals.meta_description_length, Some(41));
        assert_eq!(signals.h1_count, 1);
        assert!(signals.has_canonical);
        assert!(signals.sitemap_hint);
        assert!(!signals.robots_noindex);
        assert_eq!(signals.structured_data_blocks, 1);
        assert_eq!(signals.top_keywords.first().map(String::as_str), Some("timeouts"));
        assert_eq!(signals.keywords_in_headings, 2);
        assert_eq!(signals.internal_links, 4);
        assert_eq!(signals.external_links, 1);
        assert!(signals.has_search);
        assert_eq!(signals.nav_count, 1);
        assert!(signals.has_breadcrumbs);
        assert_eq!(signals.featured_sections, 1);
        assert_eq!(signals.category_organization, 3.0);
        assert_eq!(signals.date_mentions, 1);
    }

    #[test]
    fn missing_title_and_description() {
        let signals = collect(&AnalysisTarget::new("https://example.com", "<p>hi</p>")).unwrap();
        assert_eq!(signals.title_length, None);
        assert_eq!(signals.meta_description_length, None);
        assert_eq!(signals.keyword_density, 0.0);
    }
}

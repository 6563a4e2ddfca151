use regex::Regex;
use scraper::Html;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::error::CollectionError;
use crate::models::{AnalysisTarget, SocialSignals};
use crate::services::analysis_service::extract::html::{self, parse_document};

const MAX_SHARE_BUTTONS: usize = 20;

static PLATFORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(facebook|twitter|instagram|linkedin|youtube|pinterest|tiktok)\.com/[\w.\-]+")
        .expect("Failed to compile platform regex")
});
static SHARE_BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)share|social|like|follow|subscribe|facebook|twitter|instagram|linkedin|youtube|pinterest|tiktok")
        .expect("Failed to compile share button regex")
});
static SHARE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)shares|share-count|social-count").expect("Failed to compile share count regex")
});
static FOLLOWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)followers|follower-count|subscribers").expect("Failed to compile follower regex")
});
static TESTIMONIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)testimonial|review|rating").expect("Failed to compile testimonial regex")
});

pub fn collect(target: &AnalysisTarget) -> Result<SocialSignals, CollectionError> {
    let doc = parse_document(&target.html)?;

    // one entry per platform, sorted so repeated runs agree
    let platforms: BTreeSet<String> = PLATFORM_RE
        .captures_iter(&target.html)
        .map(|caps| caps[1].to_ascii_lowercase())
        .collect();

    Ok(SocialSignals {
        platforms: platforms.into_iter().collect(),
        share_buttons: html::count_class_or_id(&doc, &SHARE_BUTTON_RE).min(MAX_SHARE_BUTTONS),
        open_graph_tags: count_meta_prefix(&doc, "og:"),
        twitter_card_tags: count_meta_prefix(&doc, "twitter:"),
        share_counts: html::count_class(&doc, &SHARE_COUNT_RE),
        follower_counts: html::count_class(&doc, &FOLLOWER_RE),
        testimonials: html::count_class(&doc, &TESTIMONIAL_RE),
    })
}

/// Open Graph tags use `property`, Twitter cards use `name`; accept either.
fn count_meta_prefix(doc: &Html, prefix: &str) -> usize {
    let Ok(sel) = scraper::Selector::parse("meta") else {
        return 0;
    };
    doc.select(&sel)
        .filter(|el| {
            let v = el.value();
            [v.attr("property"), v.attr("name")]
                .into_iter()
                .flatten()
                .any(|key| key.to_ascii_lowercase().starts_with(prefix))
        })
        .count()
}

//! DOM queries over a parsed page. Every function here is pure and takes an
//! already-parsed `Html`.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error::CollectionError;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("Failed to parse selector {:?} - this is a bug: {:?}", css, e))
}

pub static BODY: LazyLock<Selector> = LazyLock::new(|| selector("body"));
pub static PROSE: LazyLock<Selector> = LazyLock::new(|| selector("p, li, blockquote"));
const PROSE_TAGS: &[&str] = &["p", "li", "blockquote"];
pub static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
pub static HEADINGS: LazyLock<[Selector; 6]> =
    LazyLock::new(|| ["h1", "h2", "h3", "h4", "h5", "h6"].map(selector));
pub static ANY_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6"));
pub static CLASS_OR_ID: LazyLock<Selector> = LazyLock::new(|| selector("[class], [id]"));
pub static STYLED: LazyLock<Selector> = LazyLock::new(|| selector("[style]"));
pub static STYLE_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("style"));
pub static META_NAMED: LazyLock<Selector> = LazyLock::new(|| selector("meta[name]"));
pub static LINK_REL: LazyLock<Selector> = LazyLock::new(|| selector("link[rel]"));
pub static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

static FONT_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-size\s*:\s*(\d+(?:\.\d+)?)\s*(px|pt|rem|em)")
        .expect("Failed to compile font-size regex")
});

const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Parses the page, treating an empty document as missing data.
pub fn parse_document(html: &str) -> Result<Html, CollectionError> {
    if html.trim().is_empty() {
        return Err(CollectionError::MissingData("html document"));
    }
    Ok(Html::parse_document(html))
}

pub fn body(doc: &Html) -> ElementRef<'_> {
    doc.select(&BODY).next().unwrap_or_else(|| doc.root_element())
}

/// Text a reader would see: body text nodes outside script/style, joined
/// by single spaces.
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    for node in body(doc).descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_TAGS.contains(&e.name()))
        });
        let trimmed = text.trim();
        if hidden || trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
    }
    out
}

pub fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outermost prose blocks (paragraphs, list items, quotes), so a `<p>`
/// inside a quote is read once. Falls back to the whole visible text when
/// the page has none.
pub fn prose_blocks(doc: &Html) -> Vec<String> {
    let blocks: Vec<String> = doc
        .select(&PROSE)
        .filter(|el| !inside_prose(*el))
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();
    if blocks.is_empty() {
        let text = visible_text(doc);
        if text.is_empty() {
            return Vec::new();
        }
        return vec![text];
    }
    blocks
}

fn inside_prose(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| PROSE_TAGS.contains(&a.value().name()))
}

pub fn heading_levels(doc: &Html) -> [usize; 6] {
    let mut levels = [0; 6];
    for (i, sel) in HEADINGS.iter().enumerate() {
        levels[i] = doc.select(sel).count();
    }
    levels
}

pub fn heading_texts(doc: &Html) -> Vec<String> {
    doc.select(&ANY_HEADING).map(element_text).collect()
}

pub fn count(doc: &Html, css: &str) -> usize {
    match Selector::parse(css) {
        Ok(sel) => doc.select(&sel).count(),
        Err(_) => 0,
    }
}

/// Elements whose class or id matches `re`.
pub fn count_class_or_id(doc: &Html, re: &Regex) -> usize {
    doc.select(&CLASS_OR_ID)
        .filter(|el| {
            let v = el.value();
            v.attr("class").is_some_and(|c| re.is_match(c)) || v.attr("id").is_some_and(|i| re.is_match(i))
        })
        .count()
}

pub fn count_class(doc: &Html, re: &Regex) -> usize {
    doc.select(&CLASS_OR_ID)
        .filter(|el| el.value().attr("class").is_some_and(|c| re.is_match(c)))
        .count()
}

/// `<meta name=...>` lookup, name compared case-insensitively.
pub fn meta_content<'a>(doc: &'a Html, name: &str) -> Option<&'a str> {
    doc.select(&META_NAMED)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .map(|el| el.value().attr("content").unwrap_or(""))
}

pub fn has_meta(doc: &Html, name: &str) -> bool {
    meta_content(doc, name).is_some()
}

pub fn has_link_rel(doc: &Html, rel: &str) -> bool {
    doc.select(&LINK_REL).any(|el| {
        el.value()
            .attr("rel")
            .is_some_and(|r| r.split_whitespace().any(|t| t.eq_ignore_ascii_case(rel)))
    })
}

pub fn hrefs(doc: &Html) -> Vec<&str> {
    doc.select(&ANCHOR)
        .filter_map(|el| el.value().attr("href"))
        .collect()
}

/// Word counts of non-empty paragraphs, in document order.
pub fn paragraph_lengths(doc: &Html) -> Vec<usize> {
    doc.select(&PARAGRAPH)
        .map(|p| super::text::words(&element_text(p)).len())
        .filter(|n| *n > 0)
        .collect()
}

pub fn px_from(value: f64, unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "pt" => value * 4.0 / 3.0,
        "em" | "rem" => value * 16.0,
        _ => value,
    }
}

/// Font sizes declared in inline styles and `<style>` blocks, in px.
pub fn font_sizes_px(doc: &Html) -> Vec<f64> {
    let mut sizes = Vec::new();
    let mut scan = |css: &str| {
        for caps in FONT_SIZE_RE.captures_iter(css) {
            if let Ok(value) = caps[1].parse::<f64>() {
                sizes.push(px_from(value, &caps[2]));
            }
        }
    };
    for el in doc.select(&STYLED) {
        if let Some(style) = el.value().attr("style") {
            scan(style);
        }
    }
    for el in doc.select(&STYLE_BLOCK) {
        scan(&el.text().collect::<String>());
    }
    sizes
}

/// First `limit` characters of a string, on a char boundary.
pub fn prefix(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

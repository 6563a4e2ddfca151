//! Rule-based advice. Low criterion scores produce template advice; a few
//! raw signals produce targeted advice tied to a criterion. Everything is
//! ranked by how many weighted points it could recover.

use std::collections::HashSet;

use crate::models::{Criterion, RawSignals, ScoreCard};

pub const RECOMMENDATION_THRESHOLD: f64 = 70.0;
pub const MAX_RECOMMENDATIONS: usize = 10;

const CRITICAL_BELOW: f64 = 50.0;
const MIN_CITATIONS: usize = 3;
const MIN_INTERNAL_LINKS: usize = 5;
const MIN_KEYWORD_DENSITY: f64 = 0.5;
const MAX_LOAD_TIME_SECS: f64 = 3.0;

/// What the reader would actually go and do. Two rules with the same action
/// are the same advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Action {
    SimplifyWriting,
    CiteSources,
    EngageReaders,
    AddOriginalInsight,
    ImproveLayout,
    LinkInternally,
    TuneKeywords,
    ReduceAds,
    BuildSocialPresence,
    EnableHttps,
    SpeedUpLoading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    fn label(self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    criterion: Criterion,
    // template advice is rule 0, signal rules follow in declaration order
    rule: usize,
    action: Action,
    priority: Priority,
    impact: f64,
    text: String,
}

impl Candidate {
    fn render(&self) -> String {
        format!("[{}] {}", self.priority.label(), self.text)
    }
}

fn template(criterion: Criterion) -> (Action, &'static str) {
    match criterion {
        Criterion::Readability => (
            Action::SimplifyWriting,
            "Shorten sentences to around 15 words and prefer plain, shorter words.",
        ),
        Criterion::Informativeness => (
            Action::CiteSources,
            "Add depth: cite sources, link references and support claims with images or data.",
        ),
        Criterion::Engagement => (
            Action::EngageReaders,
            "Ask readers questions, break content into lists and add clear calls to action.",
        ),
        Criterion::Uniqueness => (
            Action::AddOriginalInsight,
            "Share first-hand findings and original data, and cut stock phrases.",
        ),
        Criterion::LayoutQuality => (
            Action::ImproveLayout,
            "Add a viewport meta tag, keep a single h1 and break text into moderate paragraphs.",
        ),
        Criterion::Discoverability => (
            Action::LinkInternally,
            "Link related pages and add navigation, breadcrumbs and a sitemap.",
        ),
        Criterion::SeoKeywords => (
            Action::TuneKeywords,
            "Keep the title at 30-60 characters and the meta description at 120-160, and use the main keyword in headings.",
        ),
        Criterion::AdExperience => (
            Action::ReduceAds,
            "Show fewer ads and drop pop-ups and autoplaying media.",
        ),
        Criterion::SocialIntegration => (
            Action::BuildSocialPresence,
            "Add Open Graph tags, share buttons and links to your social profiles.",
        ),
    }
}

fn score_rules(card: &ScoreCard) -> Vec<Candidate> {
    card.score_breakdown
        .values()
        .filter(|s| s.clamped() < RECOMMENDATION_THRESHOLD)
        .map(|s| {
            let (action, advice) = template(s.criterion);
            let score = s.clamped();
            Candidate {
                criterion: s.criterion,
                rule: 0,
                action,
                priority: if score < CRITICAL_BELOW {
                    Priority::Critical
                } else {
                    Priority::High
                },
                impact: s.impact(),
                text: format!("{} ({:.1}/100): {}", s.criterion, score, advice),
            }
        })
        .collect()
}

fn signal_rules(card: &ScoreCard, signals: &RawSignals) -> Vec<Candidate> {
    let mut rules = Vec::new();
    let mut push = |criterion: Criterion, action: Action, priority: Priority, text: String| {
        let rule = rules.len() + 1;
        rules.push(Candidate {
            criterion,
            rule,
            action,
            priority,
            impact: card.score_breakdown[criterion].impact(),
            text,
        });
    };

    if let Some(security) = signals.security.get() {
        if !security.https {
            push(
                Criterion::LayoutQuality,
                Action::EnableHttps,
                Priority::Critical,
                "Serve the site over HTTPS; browsers mark plain HTTP pages as not secure.".to_string(),
            );
        }
    }
    if let Some(content) = signals.content.get() {
        if content.citation_count < MIN_CITATIONS {
            push(
                Criterion::Informativeness,
                Action::CiteSources,
                Priority::Medium,
                format!(
                    "Cite at least {} credible sources (found {}).",
                    MIN_CITATIONS, content.citation_count
                ),
            );
        }
    }
    if let Some(seo) = signals.seo.get() {
        if seo.internal_links < MIN_INTERNAL_LINKS {
            push(
                Criterion::Discoverability,
                Action::LinkInternally,
                Priority::Medium,
                format!(
                    "Add internal links to related pages (found {}, aim for {} or more).",
                    seo.internal_links, MIN_INTERNAL_LINKS
                ),
            );
        }
        if seo.keyword_density < MIN_KEYWORD_DENSITY {
            push(
                Criterion::SeoKeywords,
                Action::TuneKeywords,
                Priority::Medium,
                format!(
                    "Use the main keyword more consistently (density {:.2}%, aim for 1-3%).",
                    seo.keyword_density
                ),
            );
        }
    }
    if let Some(load) = signals.performance.get().and_then(|p| p.load_time_secs) {
        if load > MAX_LOAD_TIME_SECS {
            push(
                Criterion::LayoutQuality,
                Action::SpeedUpLoading,
                Priority::Medium,
                format!(
                    "Bring page load time under {:.0} seconds (measured {:.1}s).",
                    MAX_LOAD_TIME_SECS, load
                ),
            );
        }
    }
    rules
}

/// Ranked, deduplicated advice, at most `MAX_RECOMMENDATIONS` entries.
/// Higher impact first; ties go to criterion order, then rule order.
pub fn generate_recommendations(card: &ScoreCard, signals: &RawSignals) -> Vec<String> {
    let mut candidates = score_rules(card);
    candidates.extend(signal_rules(card, signals));

    candidates.sort_by(|a, b| {
        b.impact
            .total_cmp(&a.impact)
            .then_with(|| a.criterion.cmp(&b.criterion))
            .then_with(|| a.rule.cmp(&b.rule))
    });

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.action))
        .take(MAX_RECOMMENDATIONS)
        .map(|c| c.render())
        .collect()
}

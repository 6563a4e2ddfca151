//! Closed-form text heuristics: word and sentence segmentation, syllable
//! estimates and vocabulary counts.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::models::ReadabilityIndices;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("Failed to compile word regex")
});
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("Failed to compile sentence regex"));
static LONG_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("Failed to compile long word regex"));
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{5,}\b").expect("Failed to compile keyword regex"));

static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(great|excellent|amazing|love|perfect|wonderful|good|nice|awesome|delightful|surprising|powerful)\b")
        .expect("Failed to compile positive vocabulary regex")
});
static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bad|terrible|awful|hate|worst|horrible|poor|disappointing|mistake|painful)\b")
        .expect("Failed to compile negative vocabulary regex")
});
static CTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(click|learn more|discover|join|subscribe|download|sign up|get started|try it|read more)\b")
        .expect("Failed to compile call-to-action regex")
});
static RESEARCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(research|study|survey|data|analysis|experiment|finding|findings|evidence)\b")
        .expect("Failed to compile research vocabulary regex")
});
static FIRST_PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(I|[Ww]e|[Oo]ur|[Uu]s|[Mm]y|[Mm]ine|[Oo]urs)\b")
        .expect("Failed to compile first person regex")
});
static PRIMARY_RESEARCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(interviewed|interview|surveyed|studied|analyzed|analysed|experimented|observed|measured|tested)\b")
        .expect("Failed to compile primary research regex")
});
static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(lorem ipsum|all rights reserved|click here|in today's fast-paced world|without further ado|at the end of the day|cookie policy)")
        .expect("Failed to compile boilerplate regex")
});
static CITATION_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\([A-Z][A-Za-z]+\s+et\s+al\.?,?\s*\d{4}\)",
        r"\([A-Z][A-Za-z]+(?:\s+(?:and|&)\s+[A-Z][A-Za-z]+)?,\s*\d{4}\)",
        r"\[\d{1,3}\]",
        r"(?i)according to [A-Z][^.]{3,100}",
        r"(?i)\bsource:",
        r"(?i)\b(study|research|report) (by|from)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Failed to compile citation regex"))
    .collect()
});
static DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{4}\b",
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}\b",
        r"\b\d{4}-\d{2}-\d{2}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Failed to compile date regex"))
    .collect()
});

const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "being", "below", "could", "doing", "during", "every", "first",
    "having", "their", "there", "these", "those", "through", "under", "until", "where", "which",
    "while", "would", "other", "should", "because", "before", "between", "another", "really",
    "still", "things", "think",
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub complex_words: usize,
    pub letters: usize,
}

pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Sentences in one text block. A block with words but no terminal
/// punctuation is one sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Vowel-group estimate with the usual silent-e correction. Never below 1.
pub fn count_syllables(word: &str) -> usize {
    let lower: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if lower.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &lower {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = lower.len();
    if count > 1 && lower[n - 1] == 'e' && !(n >= 2 && lower[n - 2] == 'l') {
        count -= 1;
    }
    count.max(1)
}

pub fn text_stats<S: AsRef<str>>(blocks: &[S]) -> TextStats {
    let mut stats = TextStats::default();
    for block in blocks {
        let block = block.as_ref();
        let block_words = words(block);
        if block_words.is_empty() {
            continue;
        }
        stats.words += block_words.len();
        stats.sentences += sentences(block).len().max(1);
        for word in block_words {
            stats.letters += word.chars().filter(|c| c.is_alphanumeric()).count();
            let syllables = count_syllables(word);
            stats.syllables += syllables;
            if syllables >= 3 {
                stats.complex_words += 1;
            }
        }
    }
    stats
}

/// Flesch reading ease, Flesch-Kincaid grade, Gunning fog, SMOG,
/// automated readability index and Coleman-Liau over the given counts.
/// All zero when there is no text.
pub fn readability_indices(stats: &TextStats) -> ReadabilityIndices {
    if stats.words == 0 || stats.sentences == 0 {
        return ReadabilityIndices::default();
    }
    let words = stats.words as f64;
    let sentences = stats.sentences as f64;
    let words_per_sentence = words / sentences;
    let syllables_per_word = stats.syllables as f64 / words;
    let letters_per_word = stats.letters as f64 / words;
    let complex = stats.complex_words as f64;

    ReadabilityIndices {
        flesch_reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        flesch_kincaid_grade: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
        gunning_fog: 0.4 * (words_per_sentence + 100.0 * complex / words),
        smog_index: 1.043 * (complex * 30.0 / sentences).sqrt() + 3.1291,
        automated_readability: 4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43,
        coleman_liau: 0.0588 * letters_per_word * 100.0 - 0.296 * sentences / words * 100.0 - 15.8,
    }
}

/// Total and distinct count of words with four or more letters.
pub fn long_words(text: &str) -> (usize, usize) {
    let lowered = text.to_lowercase();
    let all: Vec<&str> = LONG_WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
    let distinct: HashSet<&str> = all.iter().copied().collect();
    (all.len(), distinct.len())
}

/// Top keywords (5+ letters, stop words removed) ordered by frequency then
/// alphabetically, and the density of the leading keyword as a percentage of
/// all words.
pub fn keyword_stats(text: &str, limit: usize) -> (Vec<String>, f64) {
    let lowered = text.to_lowercase();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in KEYWORD_RE.find_iter(&lowered) {
        if !STOP_WORDS.contains(&m.as_str()) {
            *freq.entry(m.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total_words = words(text).len();
    let density = match ranked.first() {
        Some((_, count)) if total_words > 0 => *count as f64 / total_words as f64 * 100.0,
        _ => 0.0,
    };

    let top = ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect();
    (top, density)
}

pub fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vocabulary {
    pub positive: usize,
    pub negative: usize,
    pub cta: usize,
    pub research: usize,
    pub first_person: usize,
    pub primary_research: usize,
    pub boilerplate: usize,
    pub questions: usize,
    pub exclamations: usize,
}

pub fn vocabulary(text: &str) -> Vocabulary {
    Vocabulary {
        positive: count_matches(&POSITIVE_RE, text),
        negative: count_matches(&NEGATIVE_RE, text),
        cta: count_matches(&CTA_RE, text),
        research: count_matches(&RESEARCH_RE, text),
        first_person: count_matches(&FIRST_PERSON_RE, text),
        primary_research: count_matches(&PRIMARY_RESEARCH_RE, text),
        boilerplate: count_matches(&BOILERPLATE_RE, text),
        questions: text.matches('?').count(),
        exclamations: text.matches('!').count(),
    }
}

pub fn citation_count(text: &str) -> usize {
    CITATION_RES.iter().map(|re| count_matches(re, text)).sum()
}

pub fn date_mentions(text: &str) -> usize {
    DATE_RES.iter().map(|re| count_matches(re, text)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_words_and_sentences() {
        let text = "Rust is fast. Is it safe? Yes! It's well-documented";
        assert_eq!(words(text).len(), 9);
        assert_eq!(sentences(text).len(), 4);
        assert!(sentences("   ").is_empty());
        assert_eq!(sentences("Version 1.2 is out. Update now.").len(), 2);
    }

    #[test]
    fn syllable_estimates() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("1999"), 1);
    }

    #[test]
    fn text_stats_count_unpunctuated_blocks_as_sentences() {
        let stats = text_stats(&["A heading", "One sentence here. And another one."]);
        assert_eq!(stats.words, 8);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.letters, 36);
        assert_eq!(text_stats::<&str>(&[]), TextStats::default());
    }

    #[test]
    fn readability_formulas() {
        let stats = TextStats {
            words: 20,
            sentences: 2,
            syllables: 30,
            complex_words: 2,
            letters: 80,
        };
        let r = readability_indices(&stats);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(r.flesch_reading_ease, 69.785), "{:?}", r);
        assert!(close(r.flesch_kincaid_grade, 6.01), "{:?}", r);
        assert!(close(r.gunning_fog, 8.0), "{:?}", r);
        assert!(close(r.smog_index, 1.043 * 30f64.sqrt() + 3.1291), "{:?}", r);
        assert!(close(r.automated_readability, 2.41), "{:?}", r);
        assert!(close(r.coleman_liau, 4.76), "{:?}", r);
    }

    #[test]
    fn no_text_has_zero_indices() {
        assert_eq!(readability_indices(&TextStats::default()), ReadabilityIndices::default());
    }

    #[test]
    fn long_word_ratio_inputs() {
        assert_eq!(long_words("This test tests this TEST and that"), (6, 4));
    }

    #[test]
    fn keyword_stats_are_deterministic() {
        let text = "rust rust rust crates crates tokio async";
        let (top, density) = keyword_stats(text, 10);
        assert_eq!(top, vec!["crates".to_string(), "async".to_string(), "tokio".to_string()]);
        assert!((density - 2.0 / 7.0 * 100.0).abs() < 1e-9);
        assert_eq!(keyword_stats("", 10), (Vec::new(), 0.0));
    }

    #[test]
    fn vocabulary_counts() {
        let vocab = vocabulary("We love this great study! Subscribe now? Click here to download.");
        assert_eq!(vocab.positive, 2);
        assert_eq!(vocab.research, 1);
        assert_eq!(vocab.first_person, 1);
        assert_eq!(vocab.cta, 3);
        assert_eq!(vocab.boilerplate, 1);
        assert_eq!(vocab.questions, 1);
        assert_eq!(vocab.exclamations, 1);
    }

    #[test]
    fn citations_and_dates() {
        let text = "As shown (Smith et al. 2019) and in [1], according to The Lancet review. Published 2024-03-01 and March 5, 2024.";
        assert_eq!(citation_count(text), 3);
        assert_eq!(date_mentions(text), 2);
        assert_eq!(citation_count("Nothing cited here, 2024 was a year."), 0);
    }
}

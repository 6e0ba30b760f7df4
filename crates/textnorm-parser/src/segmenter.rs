//! Sentence segmenters.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use textnorm_core::SegmenterKind;

use crate::traits::SentenceSegmenter;

/// Terminal punctuation, optional closing quotes/brackets, then whitespace.
static RE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*\s+"#).unwrap());

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e",
    "cf", "al", "inc", "ltd", "co", "corp", "dept", "est", "fig", "figs", "no", "nos",
    "vol", "vols", "pp", "approx", "gov", "gen", "col", "lt", "sgt", "rev", "u.s",
    "u.k", "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

/// Punctuation-driven segmenter.
///
/// A run of `.`, `!` or `?` followed by whitespace ends a sentence, except a
/// single period after a known abbreviation or a one-letter initial, and an
/// ellipsis followed by a lowercase word.
pub struct RuleSegmenter {
    abbreviations: HashSet<String>,
}

impl RuleSegmenter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn with_abbreviations<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations.extend(
            extra
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase()),
        );
        self
    }

    fn is_boundary(&self, text: &str, punct_start: usize, next_start: usize) -> bool {
        let terminal: String = text[punct_start..]
            .chars()
            .take_while(|c| matches!(c, '.' | '!' | '?'))
            .collect();
        let next_lower = text[next_start..]
            .chars()
            .next()
            .is_some_and(char::is_lowercase);

        if terminal.len() > 1 && terminal.chars().all(|c| c == '.') {
            return !next_lower;
        }
        if terminal != "." {
            return true;
        }

        let word = text[..punct_start]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if self.abbreviations.contains(&word) {
            return false;
        }
        let mut chars = word.chars();
        !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in RE_BOUNDARY.find_iter(text) {
            if !self.is_boundary(text, m.start(), m.end()) {
                continue;
            }
            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = m.end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }
}

/// One sentence per non-blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegmenter;

impl LineSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for LineSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// Segmenter selected by configuration.
pub fn from_kind(kind: SegmenterKind) -> Box<dyn SentenceSegmenter> {
    match kind {
        SegmenterKind::Rule => Box::new(RuleSegmenter::new()),
        SegmenterKind::Line => Box::new(LineSegmenter::new()),
    }
}

//! Phrase vocabulary learning and pair scoring.
//!
//! Unigram and bigram counts live in one map. A bigram `(a, b)` is stored
//! under `a + delimiter + b`, so a token that already contains the delimiter
//! shares its count with the matching pair.

use std::collections::HashMap;

use textnorm_core::{PhraseConfig, Result, ScoringKind, TextNormError, TokenSequence};
use tracing::{debug, warn};

use crate::phraser::Phraser;

/// Learned phrase statistics for one corpus snapshot.
#[derive(Debug, Clone)]
pub struct Phrases {
    vocab: HashMap<String, u64>,
    min_count: u64,
    threshold: f64,
    delimiter: String,
    scoring: ScoringKind,
    max_vocab_size: usize,
    min_reduce: u64,
    corpus_word_count: u64,
}

impl Phrases {
    /// Empty model; rejects configurations the scorer cannot work with.
    pub fn new(config: &PhraseConfig) -> Result<Self> {
        if config.min_count == 0 {
            return Err(TextNormError::Scoring("min_count should be at least 1".into()));
        }
        if config.delimiter.is_empty() {
            return Err(TextNormError::Scoring("delimiter must not be empty".into()));
        }
        if config.threshold.is_nan() {
            return Err(TextNormError::Scoring("threshold must be a number".into()));
        }
        match config.scoring {
            ScoringKind::Default if config.threshold <= 0.0 => {
                return Err(TextNormError::Scoring(
                    "threshold should be positive for default scoring".into(),
                ));
            }
            ScoringKind::Npmi if !(-1.0..=1.0).contains(&config.threshold) => {
                return Err(TextNormError::Scoring(
                    "threshold should be between -1 and 1 for npmi scoring".into(),
                ));
            }
            _ => {}
        }
        Ok(Self {
            vocab: HashMap::new(),
            min_count: config.min_count,
            threshold: config.threshold,
            delimiter: config.delimiter.clone(),
            scoring: config.scoring,
            max_vocab_size: config.max_vocab_size,
            min_reduce: 1,
            corpus_word_count: 0,
        })
    }

    pub fn learn(corpus: &[TokenSequence], config: &PhraseConfig) -> Result<Self> {
        let mut phrases = Self::new(config)?;
        phrases.add_vocab(corpus);
        Ok(phrases)
    }

    /// Count unigrams and adjacent pairs of every sequence.
    pub fn add_vocab(&mut self, corpus: &[TokenSequence]) {
        for sequence in corpus {
            let mut last: Option<&str> = None;
            for word in sequence {
                *self.vocab.entry(word.clone()).or_insert(0) += 1;
                if let Some(prev) = last {
                    let bigram = self.join(prev, word);
                    *self.vocab.entry(bigram).or_insert(0) += 1;
                }
                last = Some(word);
                self.corpus_word_count += 1;
            }
            if self.vocab.len() > self.max_vocab_size {
                self.prune();
            }
        }
        debug!(
            vocab = self.vocab.len(),
            words = self.corpus_word_count,
            "learned phrase vocabulary"
        );
    }

    fn prune(&mut self) {
        let before = self.vocab.len();
        let min_reduce = self.min_reduce;
        self.vocab.retain(|_, count| *count >= min_reduce);
        warn!(
            before,
            after = self.vocab.len(),
            min_reduce,
            "phrase vocabulary over capacity, pruned rare entries"
        );
        self.min_reduce += 1;
    }

    pub fn join(&self, a: &str, b: &str) -> String {
        let mut joined = String::with_capacity(a.len() + self.delimiter.len() + b.len());
        joined.push_str(a);
        joined.push_str(&self.delimiter);
        joined.push_str(b);
        joined
    }

    pub fn count(&self, key: &str) -> u64 {
        self.vocab.get(key).copied().unwrap_or(0)
    }

    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    pub fn corpus_word_count(&self) -> u64 {
        self.corpus_word_count
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Score of the pair `(a, b)`, or `None` when `a`, `b` or their join is
    /// not in the vocabulary.
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        let count_a = *self.vocab.get(a)?;
        let count_b = *self.vocab.get(b)?;
        let count_ab = *self.vocab.get(&self.join(a, b))?;
        Some(self.score_counts(count_a, count_b, count_ab))
    }

    fn score_counts(&self, count_a: u64, count_b: u64, count_ab: u64) -> f64 {
        let (a, b, ab) = (count_a as f64, count_b as f64, count_ab as f64);
        match self.scoring {
            ScoringKind::Default => {
                let denom = a * b;
                if denom == 0.0 {
                    return f64::NEG_INFINITY;
                }
                (ab - self.min_count as f64) / denom * self.vocab.len() as f64
            }
            ScoringKind::Npmi => {
                if count_ab < self.min_count {
                    return f64::NEG_INFINITY;
                }
                let total = self.corpus_word_count as f64;
                let (pa, pb, pab) = (a / total, b / total, ab / total);
                if pab >= 1.0 {
                    return f64::NEG_INFINITY;
                }
                (pab / (pa * pb)).ln() / -pab.ln()
            }
        }
    }

    /// Whether `(a, b)` scores strictly above the threshold.
    pub fn qualifies(&self, a: &str, b: &str) -> bool {
        self.score(a, b).is_some_and(|s| s > self.threshold)
    }

    /// Every qualifying pair as `((left, right), (count, score))`.
    ///
    /// Candidates come from splitting each delimited vocabulary key at every
    /// delimiter occurrence.
    pub fn export_phrases(&self) -> Vec<((String, String), (u64, f64))> {
        let mut found = Vec::new();
        for (key, &count) in &self.vocab {
            for (i, _) in key.match_indices(self.delimiter.as_str()) {
                let left = &key[..i];
                let right = &key[i + self.delimiter.len()..];
                match self.score(left, right) {
                    Some(score) if score > self.threshold => {
                        found.push(((left.to_string(), right.to_string()), (count, score)));
                    }
                    _ => {}
                }
            }
        }
        found
    }

    /// Drop the counts, keeping only the qualifying pairs.
    pub fn freeze(&self) -> Phraser {
        Phraser::from_phrases(self)
    }
}

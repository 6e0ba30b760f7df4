//! Round-by-round n-gram collapsing.
//!
//! Round `k` learns a model from the output of round `k - 1` and discards it
//! after one pass, so a token merged in one round is an ordinary token in the
//! next.

use serde::Serialize;
use textnorm_core::{types::token_count, Corpus, PhraseConfig, Result, TextNormError, TokenSequence};
use tracing::debug;

use crate::phraser::Phraser;
use crate::phrases::Phrases;
use crate::traits::{PhraseLearner, PhraseTransformer};

/// First collapsing level; it produces bigrams.
pub const START_LEVEL: usize = 2;

/// Learns [`Phrases`] with the configured counts and freezes them.
#[derive(Debug, Clone, Default)]
pub struct FrequencyLearner {
    config: PhraseConfig,
}

impl FrequencyLearner {
    pub fn new(config: PhraseConfig) -> Self {
        Self { config }
    }
}

impl PhraseLearner for FrequencyLearner {
    type Model = Phraser;

    fn learn(&self, corpus: &[TokenSequence]) -> Result<Phraser> {
        let phraser = Phrases::learn(corpus, &self.config)?.freeze();
        debug!(pairs = phraser.len(), "froze phrase model");
        Ok(phraser)
    }
}

/// Token counts around one collapsing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundStats {
    pub level: usize,
    pub tokens_before: usize,
    pub tokens_after: usize,
}

impl RoundStats {
    /// Each merge removes exactly one token. A transformer that grows the
    /// corpus reports zero.
    pub fn merges(&self) -> usize {
        self.tokens_before.saturating_sub(self.tokens_after)
    }
}

#[derive(Debug, Clone)]
pub struct CollapseResult {
    pub corpus: Corpus,
    pub rounds: Vec<RoundStats>,
}

pub struct PhraseCollapser<L: PhraseLearner = FrequencyLearner> {
    learner: L,
    n: usize,
}

impl PhraseCollapser<FrequencyLearner> {
    pub fn new(config: &PhraseConfig) -> Result<Self> {
        Self::with_learner(FrequencyLearner::new(config.clone()), config.n)
    }
}

impl<L: PhraseLearner> PhraseCollapser<L> {
    pub fn with_learner(learner: L, n: usize) -> Result<Self> {
        if n < START_LEVEL {
            return Err(TextNormError::Configuration(format!(
                "phrase order must be at least {START_LEVEL}, got {n}"
            )));
        }
        Ok(Self { learner, n })
    }

    pub fn order(&self) -> usize {
        self.n
    }

    pub fn learner(&self) -> &L {
        &self.learner
    }

    /// Collapse up to order `n`: `n - 1` rounds.
    pub fn collapse(&self, corpus: &[TokenSequence]) -> Result<Corpus> {
        self.collapse_from(corpus, START_LEVEL)
    }

    /// Collapse starting at `level`: `n - level + 1` rounds.
    pub fn collapse_from(&self, corpus: &[TokenSequence], level: usize) -> Result<Corpus> {
        Ok(self.collapse_with_stats(corpus, level)?.corpus)
    }

    pub fn collapse_with_stats(&self, corpus: &[TokenSequence], level: usize) -> Result<CollapseResult> {
        if level < START_LEVEL || level > self.n {
            return Err(TextNormError::Configuration(format!(
                "collapsing level must lie in {START_LEVEL}..={}, got {level}",
                self.n
            )));
        }

        let mut current: Option<Corpus> = None;
        let mut rounds = Vec::with_capacity(self.n - level + 1);
        for level in level..=self.n {
            let input = current.as_deref().unwrap_or(corpus);
            let model = self.learner.learn(input)?;
            let output = model.apply_corpus(input);

            let stats = RoundStats {
                level,
                tokens_before: token_count(input),
                tokens_after: token_count(&output),
            };
            debug!(
                level,
                sequences = output.len(),
                merges = stats.merges(),
                "collapsing round done"
            );
            rounds.push(stats);
            current = Some(output);
        }

        Ok(CollapseResult {
            corpus: current.unwrap_or_else(|| corpus.to_vec()),
            rounds,
        })
    }
}

/// Collapse `documents` to phrases of order up to `n` with the default
/// counts (`min_count = 2`, `threshold = 1`, `_` delimiter).
pub fn build_ngrams(documents: &[TokenSequence], n: usize) -> Result<Corpus> {
    build_ngrams_from(documents, n, START_LEVEL)
}

/// Like [`build_ngrams`], resuming at `level`.
pub fn build_ngrams_from(documents: &[TokenSequence], n: usize, level: usize) -> Result<Corpus> {
    PhraseCollapser::new(&PhraseConfig::default().with_order(n))?.collapse_from(documents, level)
}

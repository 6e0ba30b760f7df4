//! Raw text to cleaned token sequences.

use std::sync::Arc;

use textnorm_core::{LexiconProvider, Result, StopWords, TokenSequence, TokenizerConfig};
use tracing::trace;

use crate::scanner::TokenScanner;
use crate::segmenter::{self, RuleSegmenter};
use crate::traits::SentenceSegmenter;

/// Retention filter for a lowercased span.
///
/// Keeps tokens longer than two chars that are not stop words, contain no
/// ASCII digit and contain at least one ASCII lowercase letter.
pub fn is_retained(token: &str, stop_words: &StopWords) -> bool {
    token.chars().count() > 2
        && !stop_words.contains(token)
        && !token.bytes().any(|b| b.is_ascii_digit())
        && token.bytes().any(|b| b.is_ascii_lowercase())
}

/// Hyphens become the joining underscore.
pub fn join_hyphens(token: &str) -> String {
    token.replace('-', "_")
}

pub struct Tokenizer {
    stop_words: Arc<StopWords>,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl Tokenizer {
    pub fn new(stop_words: impl Into<Arc<StopWords>>) -> Self {
        Self {
            stop_words: stop_words.into(),
            segmenter: Box::new(RuleSegmenter::new()),
        }
    }

    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    /// Loads the stop words once from `provider`; provisioning errors surface here.
    pub fn from_config(config: &TokenizerConfig, provider: &dyn LexiconProvider) -> Result<Self> {
        let stop_words = StopWords::load(provider, &config.language)?
            .with_extra(config.extra_stop_words.iter().cloned());
        Ok(Self {
            stop_words: Arc::new(stop_words),
            segmenter: segmenter::from_kind(config.segmenter),
        })
    }

    pub fn with_segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn segmenter(&self) -> &dyn SentenceSegmenter {
        self.segmenter.as_ref()
    }

    /// One token sequence per sentence, in document order.
    pub fn tokenize_document(&self, text: &str) -> Vec<TokenSequence> {
        let sentences = self.segmenter.segment(text);
        trace!(sentences = sentences.len(), "segmented document");
        sentences
            .into_iter()
            .map(|sentence| self.clean_and_tokenize(sentence))
            .collect()
    }

    /// Scan, lowercase, filter, then join hyphens.
    pub fn clean_and_tokenize(&self, text: &str) -> TokenSequence {
        TokenScanner::new(text)
            .map(|span| span.as_str(text).to_lowercase())
            .filter(|token| is_retained(token, &self.stop_words))
            .map(|token| join_hyphens(&token))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}

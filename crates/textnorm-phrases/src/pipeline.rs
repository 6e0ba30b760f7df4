//! Normalization pipeline: documents to tokenized, phrase-collapsed corpus.

use serde::Serialize;
use textnorm_core::{
    types::token_count, Corpus, EmbeddedLexicon, LexiconProvider, PhraseConfig, Result,
    TextNormConfig,
};
use textnorm_parser::Tokenizer;
use tracing::info;

use crate::collapser::{PhraseCollapser, RoundStats, START_LEVEL};

/// Corpus with statistics.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub corpus: Corpus,
    pub documents: usize,
    pub sentences: usize,
    pub tokens_before: usize,
    pub tokens_after: usize,
    pub rounds: Vec<RoundStats>,
}

impl PipelineResult {
    /// Tokens absorbed into phrases across all rounds.
    pub fn merged_tokens(&self) -> usize {
        self.tokens_before.saturating_sub(self.tokens_after)
    }

    pub fn ratio(&self) -> f64 {
        if self.tokens_before == 0 { return 1.0; }
        self.tokens_after as f64 / self.tokens_before as f64
    }
}

/// Tokenizer plus collapser, assembled once.
pub struct NormalizationPipeline {
    tokenizer: Tokenizer,
    collapser: PhraseCollapser,
}

impl NormalizationPipeline {
    pub fn new(tokenizer: Tokenizer, collapser: PhraseCollapser) -> Self {
        Self { tokenizer, collapser }
    }

    /// Fails with `ResourceUnavailable` if the stop-word lexicon cannot be
    /// loaded, or `Configuration` for invalid phrase settings.
    pub fn from_config(config: &TextNormConfig, provider: &dyn LexiconProvider) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::from_config(&config.tokenizer, provider)?;
        let collapser = PhraseCollapser::new(&config.phrases)?;
        Ok(Self::new(tokenizer, collapser))
    }

    /// English stop words, default phrase settings with order `n`.
    pub fn english(n: usize) -> Result<Self> {
        let config = TextNormConfig {
            phrases: PhraseConfig::default().with_order(n),
            ..TextNormConfig::default()
        };
        Self::from_config(&config, &EmbeddedLexicon::new())
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn collapser(&self) -> &PhraseCollapser {
        &self.collapser
    }

    /// Sentences of all documents, in order, as one corpus.
    pub fn tokenize<S: AsRef<str>>(&self, documents: &[S]) -> Corpus {
        documents
            .iter()
            .flat_map(|doc| self.tokenizer.tokenize_document(doc.as_ref()))
            .collect()
    }

    pub fn process<S: AsRef<str>>(&self, documents: &[S]) -> Result<PipelineResult> {
        let tokenized = self.tokenize(documents);
        let tokens_before = token_count(&tokenized);
        let collapsed = self.collapser.collapse_with_stats(&tokenized, START_LEVEL)?;
        let tokens_after = token_count(&collapsed.corpus);

        info!(
            documents = documents.len(),
            sentences = tokenized.len(),
            tokens_before,
            tokens_after,
            "normalized corpus"
        );

        Ok(PipelineResult {
            documents: documents.len(),
            sentences: tokenized.len(),
            tokens_before,
            tokens_after,
            rounds: collapsed.rounds,
            corpus: collapsed.corpus,
        })
    }
}

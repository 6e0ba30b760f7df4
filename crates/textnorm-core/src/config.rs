use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TextNormError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextNormConfig {
    pub tokenizer: TokenizerConfig,
    pub phrases: PhraseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Stop-word lexicon language, e.g. `english`.
    pub language: String,
    pub extra_stop_words: Vec<String>,
    pub segmenter: SegmenterKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Rule,
    Line,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    /// Target phrase order. Collapsing runs `n - 1` rounds.
    pub n: usize,
    pub min_count: u64,
    pub threshold: f64,
    pub delimiter: String,
    pub scoring: ScoringKind,
    pub max_vocab_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringKind {
    #[default]
    Default,
    Npmi,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            language: "english".into(),
            extra_stop_words: Vec::new(),
            segmenter: SegmenterKind::Rule,
        }
    }
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            n: 3,
            min_count: 2,
            threshold: 1.0,
            delimiter: "_".into(),
            scoring: ScoringKind::Default,
            max_vocab_size: 40_000_000,
        }
    }
}

impl PhraseConfig {
    pub fn with_order(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(TextNormError::Configuration(format!(
                "phrase order must be at least 2, got {}",
                self.n
            )));
        }
        Ok(())
    }
}

impl TextNormConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.language.trim().is_empty() {
            return Err(TextNormError::Configuration("tokenizer language is empty".into()));
        }
        self.phrases.validate()
    }
}

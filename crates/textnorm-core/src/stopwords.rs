//! Immutable stop-word set used by the token filter.

use std::collections::HashSet;

use crate::error::Result;
use crate::lexicon::{LexiconProvider, ENGLISH_STOP_WORDS};

/// ASCII punctuation, each character is its own stop word.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Literal sentinels: an escaped newline left over from scraping, and the
/// residue of `&quot;` entities.
pub const SENTINELS: &[&str] = &["\\n", "quot"];

/// Built once at the composition root, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Lexicon words plus punctuation and sentinels.
    pub fn from_words<I, S>(lexicon: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: HashSet<String> = lexicon.into_iter().map(Into::into).collect();
        words.extend(PUNCTUATION.chars().map(String::from));
        words.extend(SENTINELS.iter().map(|s| s.to_string()));
        Self { words }
    }

    pub fn load(provider: &dyn LexiconProvider, language: &str) -> Result<Self> {
        Ok(Self::from_words(provider.words(language)?))
    }

    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

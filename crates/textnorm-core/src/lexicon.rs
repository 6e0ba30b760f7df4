//! Stop-word lexicons and their on-demand provisioning.
//!
//! Lexicons follow the NLTK data layout: `<root>/corpora/stopwords/<language>`,
//! one word per line.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, TextNormError};

/// The NLTK English stop-word list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Source of stop-word lists.
pub trait LexiconProvider: Send + Sync {
    /// Stop words for `language`, or `ResourceUnavailable`.
    fn words(&self, language: &str) -> Result<Vec<String>>;
}

/// Compiled-in lexicon. Only English is bundled.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLexicon;

impl EmbeddedLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl LexiconProvider for EmbeddedLexicon {
    fn words(&self, language: &str) -> Result<Vec<String>> {
        if language.eq_ignore_ascii_case("english") {
            Ok(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect())
        } else {
            Err(TextNormError::resource_unavailable(
                format!("stopwords/{language}"),
                "no embedded lexicon for this language",
            ))
        }
    }
}

/// Lexicon read from an NLTK-style data directory.
///
/// With provisioning enabled, a missing lexicon is written from the embedded
/// list the first time it is requested.
#[derive(Debug, Clone)]
pub struct DirectoryLexicon {
    root: PathBuf,
    provision: bool,
}

impl DirectoryLexicon {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), provision: false }
    }

    /// `$NLTK_DATA` if set, otherwise `<data dir>/nltk_data`.
    pub fn default_root() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("NLTK_DATA") {
            return Some(PathBuf::from(dir));
        }
        dirs::data_dir().map(|d| d.join("nltk_data"))
    }

    pub fn from_default_root() -> Result<Self> {
        let root = Self::default_root().ok_or_else(|| {
            TextNormError::resource_unavailable("nltk_data", "no data directory for this platform")
        })?;
        Ok(Self::new(root))
    }

    pub fn with_provisioning(mut self, provision: bool) -> Self {
        self.provision = provision;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lexicon_path(&self, language: &str) -> PathBuf {
        self.root.join("corpora").join("stopwords").join(language)
    }

    fn provision_lexicon(&self, language: &str, path: &Path) -> Result<()> {
        let words = EmbeddedLexicon.words(language)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut content = words.join("\n");
        content.push('\n');
        std::fs::write(path, content)?;
        info!(language, path = %path.display(), "provisioned stop-word lexicon");
        Ok(())
    }
}

impl LexiconProvider for DirectoryLexicon {
    fn words(&self, language: &str) -> Result<Vec<String>> {
        let path = self.lexicon_path(language);
        if !path.is_file() {
            if !self.provision {
                return Err(TextNormError::resource_unavailable(
                    format!("stopwords/{language}"),
                    format!("{} not found", path.display()),
                ));
            }
            self.provision_lexicon(language, &path)?;
        }
        let content = std::fs::read_to_string(&path)?;
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        debug!(language, count = words.len(), "loaded stop-word lexicon");
        Ok(words)
    }
}

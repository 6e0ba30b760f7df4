//! Shared types, configuration and stop-word resources for textnorm.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod stopwords;
pub mod types;

pub use config::{PhraseConfig, ScoringKind, SegmenterKind, TextNormConfig, TokenizerConfig};
pub use error::{Result, TextNormError};
pub use lexicon::{DirectoryLexicon, EmbeddedLexicon, LexiconProvider};
pub use stopwords::StopWords;
pub use types::{Corpus, Token, TokenSequence};

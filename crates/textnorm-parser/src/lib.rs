//! Sentence segmentation and token cleaning for textnorm.

pub mod scanner;
pub mod segmenter;
pub mod tokenizer;
pub mod traits;

pub use scanner::{scan, MatchKind, Span, TokenScanner};
pub use segmenter::{LineSegmenter, RuleSegmenter};
pub use tokenizer::{is_retained, Tokenizer};
pub use traits::SentenceSegmenter;

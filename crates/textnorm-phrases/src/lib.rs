//! Statistical phrase collapsing for textnorm.
//!
//! Stages:
//! 1. Vocabulary learning: unigram and adjacent-pair counts ([`Phrases`])
//! 2. Freezing: qualifying pairs only ([`Phraser`])
//! 3. Collapsing: one learn-freeze-apply round per n-gram level ([`PhraseCollapser`])

pub mod collapser;
pub mod phraser;
pub mod phrases;
pub mod pipeline;
pub mod traits;

pub use collapser::{build_ngrams, build_ngrams_from, FrequencyLearner, PhraseCollapser, RoundStats};
pub use phraser::Phraser;
pub use phrases::Phrases;
pub use pipeline::{NormalizationPipeline, PipelineResult};
pub use traits::{PhraseLearner, PhraseTransformer};

use textnorm_core::{Corpus, Result, Token, TokenSequence};

/// Rewrites a token sequence, merging selected adjacent pairs.
pub trait PhraseTransformer {
    fn apply(&self, sequence: &[Token]) -> TokenSequence;

    fn apply_corpus(&self, corpus: &[TokenSequence]) -> Corpus {
        corpus.iter().map(|sequence| self.apply(sequence)).collect()
    }
}

/// Learns a fresh transformer from a corpus snapshot.
pub trait PhraseLearner {
    type Model: PhraseTransformer;

    fn learn(&self, corpus: &[TokenSequence]) -> Result<Self::Model>;
}

/// A normalized token: lowercase, hyphens joined with `_`.
pub type Token = String;

/// Tokens of one sentence, in source order.
pub type TokenSequence = Vec<Token>;

/// Ordered collection of token sequences.
pub type Corpus = Vec<TokenSequence>;

/// Number of tokens across all sequences of a corpus.
pub fn token_count(corpus: &[TokenSequence]) -> usize {
    corpus.iter().map(Vec::len).sum()
}

/// Splits a document into sentences, in document order.
pub trait SentenceSegmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of sentences `segment` would return.
    fn count(&self, text: &str) -> usize {
        self.segment(text).len()
    }
}

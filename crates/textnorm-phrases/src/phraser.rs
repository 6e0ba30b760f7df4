//! Frozen phrase table applied to token sequences.

use std::collections::HashMap;

use textnorm_core::{Token, TokenSequence};

use crate::phrases::Phrases;
use crate::traits::PhraseTransformer;

#[derive(Debug, Clone, Default)]
pub struct Phraser {
    /// left -> right -> (pair count, score)
    phrasegrams: HashMap<String, HashMap<String, (u64, f64)>>,
    delimiter: String,
    len: usize,
}

impl Phraser {
    pub fn from_phrases(phrases: &Phrases) -> Self {
        let mut phraser = Self {
            phrasegrams: HashMap::new(),
            delimiter: phrases.delimiter().to_string(),
            len: 0,
        };
        for ((left, right), stats) in phrases.export_phrases() {
            if phraser.phrasegrams.entry(left).or_default().insert(right, stats).is_none() {
                phraser.len += 1;
            }
        }
        phraser
    }

    pub fn get(&self, left: &str, right: &str) -> Option<(u64, f64)> {
        self.phrasegrams.get(left)?.get(right).copied()
    }

    pub fn contains(&self, left: &str, right: &str) -> bool {
        self.get(left, right).is_some()
    }

    /// Number of mergeable pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn join(&self, left: &str, right: &str) -> String {
        [left, right].join(&self.delimiter)
    }
}

impl PhraseTransformer for Phraser {
    /// Greedy left-to-right merge; a merged token is not extended again in
    /// the same pass.
    fn apply(&self, sequence: &[Token]) -> TokenSequence {
        let mut out = Vec::with_capacity(sequence.len());
        let mut pending: Option<&str> = None;
        for word in sequence {
            match pending {
                Some(prev) if self.contains(prev, word) => {
                    out.push(self.join(prev, word));
                    pending = None;
                }
                Some(prev) => {
                    out.push(prev.to_string());
                    pending = Some(word);
                }
                None => pending = Some(word),
            }
        }
        if let Some(prev) = pending {
            out.push(prev.to_string());
        }
        out
    }
}

//! End-to-end tests: config file, provisioned lexicon, tokenizing, collapsing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;
use textnorm_core::{DirectoryLexicon, TextNormConfig, TextNormError, TokenSequence};
use textnorm_phrases::{build_ngrams, NormalizationPipeline};

const ABSTRACTS: &[&str] = &[
    "Artificial intelligence research is booming. Artificial intelligence startups raised new funding. \
     The report tracks artificial intelligence adoption!",
    "Clean energy projects expanded quickly. Clean energy investment doubled since 2015. \
     Regional clean energy clusters are emerging.",
    "Universities spin out companies. Some spin-out companies fail; others become unicorns.",
];

fn random_corpus(rng: &mut StdRng, sequences: usize) -> Vec<TokenSequence> {
    let words = ["data", "science", "deep", "learning", "neural", "network", "model", "graph"];
    (0..sequences)
        .map(|_| {
            let len = rng.gen_range(0..12);
            (0..len)
                .map(|_| words[rng.gen_range(0..words.len())].to_string())
                .collect()
        })
        .collect()
}

#[test]
fn test_pipeline_with_provisioned_lexicon() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("textnorm.json");
    std::fs::write(&config_path, r#"{"phrases": {"n": 3}, "tokenizer": {"language": "english"}}"#).unwrap();
    let config = TextNormConfig::from_file(&config_path).unwrap();

    let data_root = dir.path().join("nltk_data");
    let strict = DirectoryLexicon::new(&data_root);
    assert!(matches!(
        NormalizationPipeline::from_config(&config, &strict).err().unwrap(),
        TextNormError::ResourceUnavailable { .. }
    ));

    let provisioning = DirectoryLexicon::new(&data_root).with_provisioning(true);
    let pipeline = NormalizationPipeline::from_config(&config, &provisioning).unwrap();
    let result = pipeline.process(ABSTRACTS).unwrap();

    assert_eq!(result.documents, 3);
    assert_eq!(result.sentences, 8);
    assert_eq!(result.corpus.len(), 8);
    assert_eq!(result.rounds.len(), 2);
    assert!(result.corpus[0].contains(&"artificial_intelligence".to_string()));
    assert!(result.corpus[3].contains(&"clean_energy".to_string()));
    assert!(result.corpus[6].contains(&"spin".to_string()));
    assert!(result.corpus[7].contains(&"spin_out".to_string()));
    for token in result.corpus.iter().flatten() {
        assert!(token.chars().count() >= 3, "{token}");
        assert!(!token.bytes().any(|b| b.is_ascii_digit()), "{token}");
        assert!(!pipeline.tokenizer().stop_words().contains(token), "{token}");
    }
}

#[test]
fn test_collapsing_only_regroups_tokens() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let corpus = random_corpus(&mut rng, 40);
        let n = rng.gen_range(2..6);
        let out = build_ngrams(&corpus, n).unwrap();
        assert_eq!(out.len(), corpus.len());
        for (before, after) in corpus.iter().zip(&out) {
            assert!(after.len() <= before.len());
            assert_eq!(before.join("_"), after.join("_"));
        }
    }
}

#[test]
fn test_collapsing_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    let corpus = random_corpus(&mut rng, 100);
    assert_eq!(build_ngrams(&corpus, 4).unwrap(), build_ngrams(&corpus, 4).unwrap());
}

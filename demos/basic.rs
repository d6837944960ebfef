use unigram_map::{MapUnigramEstimator, UnigramError, Vocabulary, VocabularyIndex};

fn main() {
    let words = ["dinosaur", "trex", "dinosaur", "stegosaurus"];
    let vocab = Vocabulary::from_words(words);

    let mut est = MapUnigramEstimator::new(&vocab, 2.0);
    est.fit(words).unwrap();

    let p = est.predict_proba("dinosaur").unwrap();
    assert!((p - 3.0 / 7.0).abs() < 1e-12);

    for w in vocab.words() {
        println!("p({w})={:.5}", est.predict_proba(w).unwrap());
    }

    match est.predict_proba("never_seen-before") {
        Err(UnigramError::UnknownWord(w)) => println!("unknown word rejected: {w}"),
        other => panic!("expected UnknownWord, got {other:?}"),
    }

    println!(
        "V={} n={} avg_ll={:.4} nats",
        vocab.size(),
        est.total_count(),
        est.score(words).unwrap()
    );
}

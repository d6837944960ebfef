use tracing_subscriber::EnvFilter;
use unigram_map::{MapUnigramEstimator, UnigramError, Vocabulary};

fn usage() -> ! {
    eprintln!(
        "Usage:\n  cargo run --example alpha_sweep -- <alpha1> <alpha2> ...\n\n\
If no alphas are provided, a default sweep is used.\n\
Set RUST_LOG=unigram_map=trace to see estimator events."
    );
    std::process::exit(2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        usage();
    }
    let alphas: Vec<f64> = if args.is_empty() {
        vec![0.5, 1.0, 1.01, 1.5, 2.0, 5.0, 20.0]
    } else {
        args.iter()
            .map(|a| a.parse().unwrap_or_else(|_| usage()))
            .collect()
    };

    let train = "the cat sat on the mat the dog sat on the log".split_whitespace();
    let held_out = "the dog sat on the mat a cat".split_whitespace();
    // "a" is in the vocabulary but never appears in training.
    let vocab: Vocabulary = train.clone().chain(["a"]).collect();

    for alpha in alphas {
        let mut est = MapUnigramEstimator::new(&vocab, alpha);
        est.fit(train.clone()).unwrap();
        match (est.score(held_out.clone()), est.perplexity(held_out.clone())) {
            (Ok(s), Ok(ppl)) => println!("alpha={alpha:<6} avg_ll={s:.4} perplexity={ppl:.3}"),
            (Err(UnigramError::InvalidMapHyperparameter { .. }), _) => {
                println!("alpha={alpha:<6} no MAP estimate (unseen words, alpha <= 1)")
            }
            (Err(e), _) | (_, Err(e)) => panic!("unexpected error: {e}"),
        }
    }
}

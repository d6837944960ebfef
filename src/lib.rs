//! `unigram_map`: MAP estimation of unigram probabilities under a symmetric Dirichlet prior.
//!
//! Given a fixed vocabulary of \(V\) words and a training corpus, the estimator counts how
//! often each vocabulary word occurs and returns the mode of the Dirichlet posterior over
//! the vocabulary simplex.
//!
//! Design intent:
//! - Keep the vocabulary behind a small capability trait ([`VocabularyIndex`]): id lookup and
//!   size. Storage is the caller's business.
//! - Keep estimation policy here: counting, the MAP-existence condition, corpus scoring.
//!
//! ## The estimator
//!
//! With counts \(c_1, \dots, c_V\), sample size \(n = \sum_w c_w\), and a symmetric
//! Dirichlet(\(\alpha\)) prior, the MAP estimate is
//!
//! \[
//! \hat p_w = \frac{c_w + \alpha - 1}{n + V (\alpha - 1)}.
//! \]
//!
//! The mode exists when \(\alpha > 1\), or when every vocabulary word was observed at least
//! once. Outside that region [`MapUnigramEstimator::predict_proba`] returns
//! [`UnigramError::InvalidMapHyperparameter`] instead of a meaningless number.
//!
//! Corpus evaluation uses the average log-likelihood ([`MapUnigramEstimator::score`]) and its
//! derived forms (bits, perplexity).
//!
//! ## Quick example
//!
//! ```rust
//! use unigram_map::{MapUnigramEstimator, Vocabulary};
//!
//! let words = ["dinosaur", "trex", "dinosaur", "stegosaurus"];
//! let vocab = Vocabulary::from_words(words);
//!
//! let mut est = MapUnigramEstimator::new(&vocab, 2.0);
//! est.fit(words).unwrap();
//!
//! let p = est.predict_proba("dinosaur").unwrap();
//! assert!((p - 3.0 / 7.0).abs() < 1e-12);
//!
//! let avg_ll = est.score(["trex", "dinosaur"]).unwrap();
//! assert!(avg_ll <= 0.0);
//! ```

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod map;
pub mod vocab;

pub use map::{MapParams, MapUnigramEstimator};
pub use vocab::{Vocabulary, VocabularyIndex};

/// Errors for vocabulary lookup and MAP estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnigramError {
    /// The word cannot be resolved by the vocabulary.
    #[error("word not in vocabulary: {0}")]
    UnknownWord(String),

    /// The fitted counts leave some word unseen and `alpha <= 1`, so the posterior has no mode.
    #[error("hyperparameter alpha={alpha} does not yield a valid MAP estimate")]
    InvalidMapHyperparameter { alpha: f64 },

    /// An aggregate over an empty word list was requested.
    #[error("empty input")]
    EmptyInput,
}

pub type Result<T> = core::result::Result<T, UnigramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cause() {
        let e = UnigramError::UnknownWord("velociraptor".to_string());
        assert_eq!(e.to_string(), "word not in vocabulary: velociraptor");

        let e = UnigramError::InvalidMapHyperparameter { alpha: 0.5 };
        assert!(e.to_string().contains("alpha=0.5"));

        assert_eq!(UnigramError::EmptyInput.to_string(), "empty input");
    }
}

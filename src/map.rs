//! Maximum a-posteriori unigram estimation under a symmetric Dirichlet prior.
//!
//! A unigram model over a vocabulary of \(V\) words is a categorical parameter
//! \(p \in \Delta^{V-1}\). With a symmetric Dirichlet(\(\alpha\)) prior and observed counts
//! \(c_w\) (sample size \(n\)), the posterior is Dirichlet(\(c_w + \alpha\)) and its mode is
//!
//! \[
//! \hat p_w = \frac{c_w + \alpha - 1}{n + V(\alpha - 1)}.
//! \]
//!
//! That is: add \(\alpha - 1\) pseudo-counts to every word and renormalize. The mode lies in
//! the simplex when \(\alpha > 1\), or when every word has \(c_w \ge 1\). Otherwise the
//! posterior density is unbounded at a face of the simplex and there is no MAP estimate;
//! the estimator reports [`UnigramError::InvalidMapHyperparameter`] rather than returning a
//! number outside \([0, 1]\).
//!
//! Special cases:
//! - \(\alpha = 1\) (uniform prior) reduces to the maximum-likelihood estimate \(c_w / n\).
//! - \(\alpha = 2\) is add-one (Laplace) smoothing.
//!
//! The validity check is lazy: it runs on every prediction against the current counts, since
//! whether the mode exists depends on the corpus as well as on \(\alpha\).

#![forbid(unsafe_code)]

use tracing::{debug, trace};

use crate::vocab::VocabularyIndex;
use crate::{Result, UnigramError};

/// Estimator configuration.
///
/// `alpha` is the concentration of the symmetric Dirichlet prior. It is not range-checked
/// here: whether a given `alpha` yields a MAP estimate depends on the fitted counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapParams {
    /// Dirichlet concentration. `alpha - 1` pseudo-counts are added to every word.
    pub alpha: f64,
}

impl Default for MapParams {
    /// `alpha = 2.0` (add-one smoothing).
    fn default() -> Self {
        Self { alpha: 2.0 }
    }
}

impl MapParams {
    #[must_use]
    pub fn with_alpha(alpha: f64) -> Self {
        Self { alpha }
    }
}

/// MAP unigram estimator over a borrowed vocabulary.
///
/// Fitted state is the per-word count vector (index-aligned with vocabulary ids) and the
/// total token count. Each [`fit`](Self::fit) replaces it wholesale; predictions and scores
/// only read it.
///
/// Before the first successful `fit` the estimator behaves as if fitted on an empty corpus:
/// every count is zero, so with `alpha > 1` it predicts the prior mode (uniform).
///
/// # Examples
///
/// ```
/// use unigram_map::{MapUnigramEstimator, UnigramError, Vocabulary};
///
/// let words = ["dinosaur", "trex", "dinosaur", "stegosaurus"];
/// let vocab = Vocabulary::from_words(words);
/// let mut est = MapUnigramEstimator::new(&vocab, 2.0);
/// est.fit(words).unwrap();
///
/// assert!((est.predict_proba("dinosaur").unwrap() - 3.0 / 7.0).abs() < 1e-12);
/// assert!(matches!(
///     est.predict_proba("never_seen-before"),
///     Err(UnigramError::UnknownWord(_))
/// ));
/// ```
#[derive(Debug)]
pub struct MapUnigramEstimator<'v, V: VocabularyIndex + ?Sized> {
    vocab: &'v V,
    alpha: f64,
    counts: Option<Vec<usize>>,
    total_count: usize,
    // Number of strictly positive entries in `counts`.
    observed_support: usize,
}

impl<'v, V: VocabularyIndex + ?Sized> MapUnigramEstimator<'v, V> {
    /// Create an unfitted estimator with Dirichlet concentration `alpha`.
    pub fn new(vocab: &'v V, alpha: f64) -> Self {
        Self::with_params(vocab, MapParams::with_alpha(alpha))
    }

    /// Create an unfitted estimator from [`MapParams`].
    pub fn with_params(vocab: &'v V, params: MapParams) -> Self {
        Self {
            vocab,
            alpha: params.alpha,
            counts: None,
            total_count: 0,
            observed_support: 0,
        }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn vocab(&self) -> &'v V {
        self.vocab
    }

    /// Per-word counts from the last successful fit, indexed by vocabulary id.
    #[must_use]
    pub fn counts(&self) -> Option<&[usize]> {
        self.counts.as_deref()
    }

    /// Number of tokens in the last successful fit (0 before any fit).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of vocabulary words observed at least once in the last successful fit.
    #[must_use]
    pub fn observed_support(&self) -> usize {
        self.observed_support
    }

    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.counts.is_some()
    }

    /// Whether the posterior mode exists for the current counts: `alpha > 1`, or every
    /// vocabulary word has been observed.
    #[must_use]
    pub fn map_exists(&self) -> bool {
        let all_vocab_seen = self.observed_support == self.vocab.size();
        all_vocab_seen || self.alpha > 1.0
    }

    /// Fit the estimator to a training corpus.
    ///
    /// Counts every occurrence of every word and records the corpus length. The previous
    /// fitted state is replaced, not accumulated into.
    ///
    /// # Errors
    ///
    /// Returns [`UnigramError::UnknownWord`] for the first word the vocabulary cannot
    /// resolve. The previous fitted state (if any) is left untouched in that case.
    ///
    /// # Panics
    ///
    /// Panics if the vocabulary returns an id outside `0..size()`.
    pub fn fit<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = vec![0usize; self.vocab.size()];
        let mut total = 0usize;
        for word in words {
            let word = word.as_ref();
            let id = self.vocab.word_id(word).map_err(|e| {
                debug!(word, tokens_seen = total, "fit rejected");
                e
            })?;
            counts[id] += 1;
            total += 1;
        }

        let observed = counts.iter().filter(|&&c| c > 0).count();
        debug!(
            tokens = total,
            observed_support = observed,
            vocab_size = counts.len(),
            "fitted unigram counts"
        );

        self.counts = Some(counts);
        self.total_count = total;
        self.observed_support = observed;
        Ok(())
    }

    /// MAP probability of `word` under the fitted model.
    ///
    /// \[
    /// \hat p_w = \frac{c_w + \alpha - 1}{n + V(\alpha - 1)}
    /// \]
    ///
    /// The result is in \([0, 1]\) whenever the MAP estimate exists; it is not clamped.
    ///
    /// # Errors
    ///
    /// - [`UnigramError::UnknownWord`] if `word` is not in the vocabulary. This is reported
    ///   regardless of fit state or `alpha`.
    /// - [`UnigramError::InvalidMapHyperparameter`] if some vocabulary word is unseen and
    ///   `alpha <= 1`.
    pub fn predict_proba(&self, word: &str) -> Result<f64> {
        let id = self.vocab.word_id(word)?;
        self.check_map_exists()?;
        Ok(self.proba_of_id(id))
    }

    /// The full MAP distribution, in vocabulary id order.
    ///
    /// # Errors
    ///
    /// Returns [`UnigramError::InvalidMapHyperparameter`] if the MAP estimate does not exist.
    pub fn probabilities(&self) -> Result<Vec<f64>> {
        self.check_map_exists()?;
        Ok((0..self.vocab.size()).map(|id| self.proba_of_id(id)).collect())
    }

    /// Average log-likelihood (nats per token) of `words` under the fitted model:
    ///
    /// \[
    /// \frac{1}{|L|} \sum_{w \in L} \ln \hat p_w.
    /// \]
    ///
    /// The value lies in \((-\infty, 0]\); it is \(-\infty\) if some word has probability
    /// exactly zero.
    ///
    /// # Errors
    ///
    /// - [`UnigramError::EmptyInput`] if `words` is empty.
    /// - Any error from [`predict_proba`](Self::predict_proba), for the first word raising it.
    pub fn score<I, S>(&self, words: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_log_proba = 0.0;
        let mut n = 0usize;
        for word in words {
            total_log_proba += self.predict_proba(word.as_ref())?.ln();
            n += 1;
        }
        if n == 0 {
            return Err(UnigramError::EmptyInput);
        }
        let avg = total_log_proba / n as f64;
        trace!(tokens = n, avg_log_proba = avg, "scored word list");
        Ok(avg)
    }

    /// [`score`](Self::score) in bits per token.
    ///
    /// # Errors
    ///
    /// Same as [`score`](Self::score).
    pub fn score_bits<I, S>(&self, words: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.score(words)? / core::f64::consts::LN_2)
    }

    /// Per-token perplexity of `words`: \(\exp(-\text{score})\).
    ///
    /// # Errors
    ///
    /// Same as [`score`](Self::score).
    pub fn perplexity<I, S>(&self, words: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok((-self.score(words)?).exp())
    }

    fn check_map_exists(&self) -> Result<()> {
        if self.map_exists() {
            return Ok(());
        }
        trace!(
            alpha = self.alpha,
            observed_support = self.observed_support,
            vocab_size = self.vocab.size(),
            "MAP estimate does not exist"
        );
        Err(UnigramError::InvalidMapHyperparameter { alpha: self.alpha })
    }

    fn proba_of_id(&self, id: usize) -> f64 {
        let c = self.counts.as_ref().map_or(0, |counts| counts[id]) as f64;
        let pseudo = self.alpha - 1.0;
        let v = self.vocab.size() as f64;
        (c + pseudo) / (self.total_count as f64 + v * pseudo)
    }
}

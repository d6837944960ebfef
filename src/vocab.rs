//! Vocabulary: a stable mapping from words to dense integer ids.
//!
//! The estimator only needs two capabilities from a vocabulary, captured by
//! [`VocabularyIndex`]:
//!
//! - `size()`: the number of distinct words \(V\).
//! - `word_id(word)`: an id in `0..size()`, or [`UnigramError::UnknownWord`].
//!
//! Ids index the estimator's count vector, so a vocabulary must keep every word's id fixed for
//! as long as an estimator borrows it. [`Vocabulary`] is a hash-backed implementation that
//! assigns ids in first-occurrence order.

use std::collections::HashMap;

use crate::{Result, UnigramError};

/// Id lookup and size: everything the estimator asks of a vocabulary.
pub trait VocabularyIndex {
    /// Number of distinct words. Fixed for the lifetime of the index.
    fn size(&self) -> usize;

    /// Id of `word` in `0..self.size()`.
    ///
    /// # Errors
    ///
    /// Returns [`UnigramError::UnknownWord`] if `word` is not in the vocabulary.
    fn word_id(&self, word: &str) -> Result<usize>;

    /// Whether `word` resolves to an id.
    fn contains(&self, word: &str) -> bool {
        self.word_id(word).is_ok()
    }
}

impl<T: VocabularyIndex + ?Sized> VocabularyIndex for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn word_id(&self, word: &str) -> Result<usize> {
        (**self).word_id(word)
    }
}

/// Hash-backed vocabulary with ids in first-occurrence order.
///
/// # Examples
///
/// ```
/// use unigram_map::{Vocabulary, VocabularyIndex};
///
/// let vocab = Vocabulary::from_words(["dinosaur", "trex", "dinosaur", "stegosaurus"]);
/// assert_eq!(vocab.size(), 3);
/// assert_eq!(vocab.word_id("trex").unwrap(), 1);
/// assert_eq!(vocab.word(2), Some("stegosaurus"));
/// assert!(vocab.word_id("velociraptor").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from a word sequence, collapsing duplicates.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for w in words {
            vocab.insert(w.as_ref());
        }
        vocab
    }

    /// Add `word` if absent and return its id.
    ///
    /// Existing ids are never renumbered, so a word already present keeps its id.
    pub fn insert(&mut self, word: &str) -> usize {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len();
        self.words.push(word.to_owned());
        self.ids.insert(word.to_owned(), id);
        id
    }

    /// The word with id `id`, if any.
    #[must_use]
    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Words in id order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl VocabularyIndex for Vocabulary {
    fn size(&self) -> usize {
        self.words.len()
    }

    fn word_id(&self, word: &str) -> Result<usize> {
        self.ids
            .get(word)
            .copied()
            .ok_or_else(|| UnigramError::UnknownWord(word.to_owned()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ids_follow_first_occurrence() {
        let vocab: Vocabulary = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(vocab.size(), 3);
        assert_eq!(vocab.word_id("b").unwrap(), 0);
        assert_eq!(vocab.word_id("a").unwrap(), 1);
        assert_eq!(vocab.word_id("c").unwrap(), 2);
        assert_eq!(vocab.words().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn unknown_word_is_reported_with_the_word() {
        let vocab = Vocabulary::from_words(["trex"]);
        assert_eq!(
            vocab.word_id("never_seen-before"),
            Err(UnigramError::UnknownWord("never_seen-before".to_string()))
        );
        assert!(!vocab.contains("never_seen-before"));
        assert!(vocab.contains("trex"));
    }

    #[test]
    fn insert_keeps_existing_ids() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.insert("x"), 0);
        assert_eq!(vocab.insert("y"), 1);
        assert_eq!(vocab.insert("x"), 0);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.word(1), Some("y"));
        assert_eq!(vocab.word(2), None);
    }

    #[test]
    fn reference_forwards_to_the_index() {
        fn lookup<V: VocabularyIndex>(v: V, word: &str) -> (usize, usize) {
            (v.size(), v.word_id(word).unwrap())
        }
        let vocab = Vocabulary::from_words(["p", "q"]);
        assert_eq!(lookup(&vocab, "q"), (2, 1));

        let dynamic: &dyn VocabularyIndex = &vocab;
        assert_eq!(lookup(dynamic, "p"), (2, 0));
    }

    proptest! {
        #[test]
        fn word_and_word_id_are_inverse(words in prop::collection::vec("[a-e]{1,3}", 0..60)) {
            let vocab = Vocabulary::from_words(&words);
            for id in 0..vocab.size() {
                let w = vocab.word(id).unwrap();
                prop_assert_eq!(vocab.word_id(w).unwrap(), id);
            }
            for w in &words {
                prop_assert!(vocab.word_id(w).unwrap() < vocab.size());
            }
        }
    }
}

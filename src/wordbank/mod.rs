//! Word lists and secret selection
//!
//! A `WordBank` owns the two word collections the game runs on: the answer
//! pool (words eligible to be chosen as secrets) and the guess dictionary
//! (the superset of words accepted as guesses). Both are loaded once at
//! startup and read-only afterwards, so a single bank can back any number
//! of sessions.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Error returned when a secret is requested from an empty answer pool
///
/// This is a startup data problem: no session can be created without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Answer pool is empty, cannot pick a secret word")
    }
}

impl std::error::Error for EmptyPoolError {}

/// The answer pool and guess dictionary
pub struct WordBank {
    answers: Vec<Word>,
    dictionary: FxHashSet<Word>,
}

impl WordBank {
    /// Create a bank from an answer pool and a dictionary
    ///
    /// The pool is folded into the dictionary, so every possible secret is
    /// always a legal guess.
    #[must_use]
    pub fn new(answers: Vec<Word>, dictionary: impl IntoIterator<Item = Word>) -> Self {
        let mut set: FxHashSet<Word> = dictionary.into_iter().collect();
        set.extend(answers.iter().cloned());

        Self {
            answers,
            dictionary: set,
        }
    }

    /// Create a bank from the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(DICTIONARY),
        )
    }

    /// Create a bank from a custom word list file
    ///
    /// The file supplies both the answer pool and the dictionary.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(words.clone(), words))
    }

    /// Pick a secret word uniformly at random from the answer pool
    ///
    /// A seed makes the choice deterministic, for reproducible games and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the answer pool has no words.
    pub fn pick_secret(&self, seed: Option<u64>) -> Result<Word, EmptyPoolError> {
        let picked = match seed {
            Some(seed) => self.answers.choose(&mut StdRng::seed_from_u64(seed)),
            None => self.answers.choose(&mut rand::rng()),
        };

        picked.cloned().ok_or(EmptyPoolError)
    }

    /// The secret for a given daily puzzle number
    ///
    /// Puzzle numbers map onto the answer pool in order, wrapping around
    /// when the pool is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the answer pool has no words.
    pub fn daily_secret(&self, puzzle: u32) -> Result<Word, EmptyPoolError> {
        if self.answers.is_empty() {
            return Err(EmptyPoolError);
        }

        let index = puzzle as usize % self.answers.len();
        Ok(self.answers[index].clone())
    }

    /// Check whether `input` is an acceptable guess
    ///
    /// Case-insensitive: the input must normalize to a well-formed 5-letter
    /// word that appears in the dictionary. Pure, no side effects.
    #[must_use]
    pub fn is_valid_guess(&self, input: &str) -> bool {
        Word::new(input.trim()).is_ok_and(|word| self.dictionary.contains(&word))
    }

    /// Number of words in the answer pool
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn dictionary_count(&self) -> usize {
        self.dictionary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> WordBank {
        let answers = loader::words_from_slice(&["crane", "slate", "allow"]);
        let extra = loader::words_from_slice(&["llama", "irate"]);
        WordBank::new(answers, extra)
    }

    #[test]
    fn embedded_lists_are_well_formed() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }

        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_answers_subset_of_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &answer in ANSWERS {
            assert!(
                dictionary.contains(&answer),
                "Answer '{answer}' not in dictionary"
            );
        }
    }

    #[test]
    fn pool_words_are_valid_guesses() {
        let bank = small_bank();
        assert!(bank.is_valid_guess("crane"));
        assert!(bank.is_valid_guess("slate"));
        assert!(bank.is_valid_guess("allow"));
    }

    #[test]
    fn guess_only_words_are_valid_guesses() {
        let bank = small_bank();
        assert!(bank.is_valid_guess("llama"));
        assert!(bank.is_valid_guess("irate"));
    }

    #[test]
    fn guess_validation_normalizes_case_and_whitespace() {
        let bank = small_bank();
        assert!(bank.is_valid_guess("CRANE"));
        assert!(bank.is_valid_guess("  LLama "));
    }

    #[test]
    fn guess_validation_rejects_unknown_and_malformed() {
        let bank = small_bank();
        assert!(!bank.is_valid_guess("zzzzz"));
        assert!(!bank.is_valid_guess("cran"));
        assert!(!bank.is_valid_guess("cranes"));
        assert!(!bank.is_valid_guess("cr4ne"));
        assert!(!bank.is_valid_guess(""));
    }

    #[test]
    fn seeded_pick_is_deterministic() {
        let bank = small_bank();
        let first = bank.pick_secret(Some(42)).unwrap();
        for _ in 0..5 {
            assert_eq!(bank.pick_secret(Some(42)).unwrap(), first);
        }
    }

    #[test]
    fn unseeded_pick_comes_from_pool() {
        let bank = small_bank();
        for _ in 0..20 {
            let secret = bank.pick_secret(None).unwrap();
            assert!(["crane", "slate", "allow"].contains(&secret.text()));
        }
    }

    #[test]
    fn empty_pool_fails() {
        let bank = WordBank::new(Vec::new(), loader::words_from_slice(&["llama"]));
        assert_eq!(bank.pick_secret(None), Err(EmptyPoolError));
        assert_eq!(bank.pick_secret(Some(7)), Err(EmptyPoolError));
        assert_eq!(bank.daily_secret(0), Err(EmptyPoolError));
    }

    #[test]
    fn daily_secret_indexes_pool_in_order() {
        let bank = small_bank();
        assert_eq!(bank.daily_secret(0).unwrap().text(), "crane");
        assert_eq!(bank.daily_secret(1).unwrap().text(), "slate");
        assert_eq!(bank.daily_secret(2).unwrap().text(), "allow");
        // Wraps around
        assert_eq!(bank.daily_secret(3).unwrap().text(), "crane");
    }

    #[test]
    fn counts_reflect_pool_fold() {
        let bank = small_bank();
        assert_eq!(bank.answer_count(), 3);
        // 3 answers + 2 guess-only words
        assert_eq!(bank.dictionary_count(), 5);
    }
}

//! Per-letter guess feedback
//!
//! Scoring a guess against the secret uses Wordle's two-pass rules:
//! exact-position matches are marked first and consume a letter from the
//! secret's multiset, then remaining positions are marked present or absent
//! left to right from whatever counts survive. This is what makes duplicate
//! letters come out right.

use super::Word;
use std::fmt;

/// Result of one guessed letter
///
/// The derived ordering (`Absent < Present < Correct`) is what keyboard
/// hints use to merge a new status with the best one seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur in the secret, or every occurrence is already
    /// claimed by a higher-priority match
    Absent,
    /// Letter occurs in the secret but not at this position
    Present,
    /// Letter matches the secret at this exact position
    Correct,
}

/// Feedback for a full 5-letter guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; 5]);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove each from the
    ///    secret's per-letter remaining-count pool
    /// 2. Second pass, left to right: mark `Present` while the pool still
    ///    has that letter, decrementing; otherwise `Absent`
    ///
    /// Pure and deterministic. A letter is never credited more times than
    /// it occurs in the secret, and exact matches always win over
    /// same-letter-elsewhere matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterStatus, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(feedback.statuses()[4], LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; 5];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = LetterStatus::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: presence matches from the remaining pool
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == LetterStatus::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The five per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; 5] {
        &self.0
    }

    /// Check whether every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Iterate over (position, status) pairs
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Feedback {
    /// Compact `C`/`P`/`A` form, mostly useful in logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let ch = match status {
                LetterStatus::Correct => 'C',
                LetterStatus::Present => 'P',
                LetterStatus::Absent => 'A',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn status_ordering_backs_hint_merge() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn exact_match_all_correct() {
        let feedback = Feedback::score(&word("apple"), &word("apple"));
        assert_eq!(*feedback.statuses(), [Correct; 5]);
        assert!(feedback.is_win());
    }

    #[test]
    fn no_letters_shared_all_absent() {
        let feedback = Feedback::score(&word("jumbo"), &word("width"));
        assert_eq!(*feedback.statuses(), [Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn duplicate_guess_letters_single_secret_occurrence() {
        // Secret ALLOW: {a:1, l:2, o:1, w:1}. Guess LLAMA:
        // L at 0 -> present (l count 2 -> 1)
        // L at 1 -> present (l count 1 -> 0)
        // A at 2 -> present (a count 1 -> 0)
        // M at 3 -> absent
        // A at 4 -> absent (a count exhausted)
        let feedback = Feedback::score(&word("llama"), &word("allow"));
        assert_eq!(
            *feedback.statuses(),
            [Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_consumes_before_presence() {
        // Secret ERASE has two E's. Guess SPEED:
        // S(present) P(absent) E(present) E(present) D(absent)
        let feedback = Feedback::score(&word("speed"), &word("erase"));
        assert_eq!(
            *feedback.statuses(),
            [Present, Absent, Present, Present, Absent]
        );

        // Secret FLOOR vs guess ROBOT: second O is exact, first O takes the
        // remaining occurrence as present
        let feedback = Feedback::score(&word("robot"), &word("floor"));
        assert_eq!(
            *feedback.statuses(),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn earlier_duplicate_wins_present_over_later() {
        // Secret ABIDE has one E. Guess EERIE: the final E is an exact
        // match and consumes the only E, so both earlier E's are absent.
        let feedback = Feedback::score(&word("eerie"), &word("abide"));
        assert_eq!(feedback.statuses()[4], Correct);
        assert_eq!(feedback.statuses()[0], Absent);
        assert_eq!(feedback.statuses()[1], Absent);

        // Secret CABIN has one A at position 1. Guess ARRAY: the first A
        // wins present, the second gets nothing.
        let feedback = Feedback::score(&word("array"), &word("cabin"));
        assert_eq!(feedback.statuses()[0], Present);
        assert_eq!(feedback.statuses()[3], Absent);
    }

    #[test]
    fn credited_count_never_exceeds_secret_count() {
        let secret = word("allow");
        for guess in ["llama", "lolly", "allow", "aloof", "label"] {
            let guess = word(guess);
            let feedback = Feedback::score(&guess, &secret);

            let secret_counts = secret.char_counts();
            for (&letter, &count) in &secret_counts {
                let credited = (0..5)
                    .filter(|&i| {
                        guess.chars()[i] == letter
                            && feedback.statuses()[i] != Absent
                    })
                    .count();
                assert!(
                    credited <= usize::from(count),
                    "letter {} credited {credited} times but occurs {count}x",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let guess = word("llama");
        let secret = word("allow");
        let first = Feedback::score(&guess, &secret);
        for _ in 0..10 {
            assert_eq!(Feedback::score(&guess, &secret), first);
        }
    }

    #[test]
    fn display_compact_form() {
        let feedback = Feedback::score(&word("llama"), &word("allow"));
        assert_eq!(feedback.to_string(), "PPPAA");
    }
}

use crate::constraint::WordConstraint;
use crate::results::WordleError;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::result::Result;
use std::sync::Arc;

/// A guess, along with the number of possible words that are expected to remain after it.
///
/// Lower is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredGuess {
    pub guess: Arc<str>,
    pub expected_remaining: f64,
}

/// Computes how many of `possible_words` are expected to remain after guessing `guess`, given
/// everything already known in `base`.
///
/// Each possible word is assumed in turn to be the objective. The constraint from guessing
/// `guess` against it is merged into `base`, and the possible words that still satisfy the result
/// are counted. The score is the mean of these counts. An assumed objective that contradicts
/// `base` counts as zero remaining words.
///
/// The cost is *O*(*n*<sup>2</sup>), where *n* is the number of possible words.
///
/// ```
/// use greedy_wordle_solver::WordConstraint;
/// use greedy_wordle_solver::scorers::score_guess;
/// use std::sync::Arc;
///
/// let possible_words: Vec<Arc<str>> = vec![Arc::from("crane"), Arc::from("plane")];
///
/// // Either way, "plumb" tells the two words apart.
/// let score = score_guess("plumb", &possible_words, &WordConstraint::new()).unwrap();
/// assert_eq!(score, 1.0);
/// ```
pub fn score_guess(
    guess: &str,
    possible_words: &[Arc<str>],
    base: &WordConstraint,
) -> Result<f64, WordleError> {
    if possible_words.is_empty() {
        return Err(WordleError::InconsistentConstraint);
    }
    let mut total_remaining = 0;
    for assumed_answer in possible_words {
        let assumed_constraint = WordConstraint::from_answer(guess, assumed_answer)?;
        // An assumed answer that contradicts `base` leaves no words.
        let merged = match base.merge(Some(&assumed_constraint)) {
            Ok(merged) => merged,
            Err(WordleError::IncompatibleMerge) => continue,
            Err(e) => return Err(e),
        };
        total_remaining += possible_words
            .iter()
            .filter(|word| merged.is_satisfied_by(word))
            .count();
    }
    Ok(total_remaining as f64 / possible_words.len() as f64)
}

/// Scores every word in `guesses` with [`score_guess`], and sorts them from the fewest expected
/// remaining words to the most.
///
/// Guesses with equal scores keep their order from `guesses`. If `parallel` is set, the guesses
/// are scored on the rayon thread pool; the result is the same either way.
pub fn rank_guesses(
    guesses: &[Arc<str>],
    possible_words: &[Arc<str>],
    base: &WordConstraint,
    parallel: bool,
) -> Result<Vec<ScoredGuess>, WordleError> {
    let to_scored_guess = |guess: &Arc<str>| -> Result<ScoredGuess, WordleError> {
        Ok(ScoredGuess {
            guess: Arc::clone(guess),
            expected_remaining: score_guess(guess, possible_words, base)?,
        })
    };
    let mut scored_guesses: Vec<ScoredGuess> = if parallel {
        guesses
            .par_iter()
            .map(to_scored_guess)
            .collect::<Result<Vec<ScoredGuess>, WordleError>>()?
    } else {
        guesses
            .iter()
            .map(to_scored_guess)
            .collect::<Result<Vec<ScoredGuess>, WordleError>>()?
    };
    scored_guesses.sort_by(|a, b| a.expected_remaining.total_cmp(&b.expected_remaining));
    Ok(scored_guesses)
}

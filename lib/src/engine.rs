use crate::constraint::WordConstraint;
use crate::data::filter_words;
use crate::data::to_letters;
use crate::data::WordBank;
use crate::results::WordleError;
use crate::scorers::rank_guesses;
use crate::scorers::ScoredGuess;
use log::debug;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::result::Result;
use std::sync::Arc;

/// The first guess used when no opening guess is configured.
pub const DEFAULT_OPENING_GUESS: &str = "tares";

/// Configures how the [`Solver`] plays.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Always the first guess. It is never scored, since scoring the whole word bank against
    /// itself before anything is known is the most expensive round of all.
    pub opening_guess: Box<str>,
    /// Whether to score guesses on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            opening_guess: Box::from(DEFAULT_OPENING_GUESS),
            parallel: true,
        }
    }
}

/// Where the [`Solver`] is in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Nothing has been guessed yet. The next guess is the opening guess.
    Start,
    /// More than one word is still possible.
    Guessing,
    /// Exactly one word is still possible.
    Narrowed,
    /// The latest guess was the objective word.
    Solved,
}

/// The outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The only word left once the guesses had been made.
    pub answer: Arc<str>,
    /// The guesses that were made, in order.
    pub guesses: Vec<Arc<str>>,
}

impl Solution {
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Picks each guess by minimizing the expected number of words left after it.
///
/// Every word in the bank may be guessed, whether or not it is still possible, except for words
/// that were already guessed.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    unguessed_words: Vec<Arc<str>>,
    possible_words: Vec<Arc<str>>,
    constraint: WordConstraint,
    guesses: Vec<Arc<str>>,
    is_solved: bool,
}

impl Solver {
    /// Constructs a new `Solver` that guesses words from the given bank.
    ///
    /// ```
    /// use greedy_wordle_solver::Solver;
    /// use greedy_wordle_solver::SolverConfig;
    /// use greedy_wordle_solver::SolverState;
    /// use greedy_wordle_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["crane", "plane", "plume"]);
    /// let solver = Solver::new(&bank, SolverConfig::default());
    ///
    /// assert_eq!(solver.state(), SolverState::Start);
    /// assert_eq!(solver.select_next_guess().unwrap().as_deref(), Some("tares"));
    /// ```
    pub fn new(bank: &WordBank, config: SolverConfig) -> Solver {
        Solver {
            config,
            unguessed_words: bank.to_vec(),
            possible_words: bank.to_vec(),
            constraint: WordConstraint::new(),
            guesses: Vec::new(),
            is_solved: false,
        }
    }

    pub fn state(&self) -> SolverState {
        if self.is_solved {
            SolverState::Solved
        } else if self.guesses.is_empty() {
            SolverState::Start
        } else if self.possible_words.len() == 1 {
            SolverState::Narrowed
        } else {
            SolverState::Guessing
        }
    }

    /// Returns the words that are still possible.
    pub fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }

    /// Returns everything learned so far.
    pub fn constraint(&self) -> &WordConstraint {
        &self.constraint
    }

    pub fn guesses(&self) -> &[Arc<str>] {
        &self.guesses
    }

    /// Selects the next word to guess, or `None` once the objective word has been guessed.
    pub fn select_next_guess(&self) -> Result<Option<Arc<str>>, WordleError> {
        match self.state() {
            SolverState::Start => Ok(Some(Arc::from(&*self.config.opening_guess))),
            SolverState::Solved => Ok(None),
            SolverState::Narrowed => Ok(self.possible_words.first().map(Arc::clone)),
            SolverState::Guessing => {
                let best = self.select_top_n_guesses(1)?.into_iter().next();
                Ok(best
                    .map(|scored| scored.guess)
                    .or_else(|| self.possible_words.first().map(Arc::clone)))
            }
        }
    }

    /// Ranks the unguessed words against the words that are still possible, and returns the best
    /// `n`.
    pub fn select_top_n_guesses(&self, n: usize) -> Result<Vec<ScoredGuess>, WordleError> {
        let mut ranked = rank_guesses(
            &self.unguessed_words,
            &self.possible_words,
            &self.constraint,
            self.config.parallel,
        )?;
        if let Some(best) = ranked.first() {
            trace!(
                "Best guess: {} ({:.3} words expected to remain)",
                best.guess,
                best.expected_remaining
            );
        }
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Records that `guess` was made, and that it revealed `constraint`.
    ///
    /// If no possible word would be left, this returns [`WordleError::InconsistentConstraint`]
    /// and the solver is left as it was.
    pub fn update(&mut self, guess: &str, constraint: &WordConstraint) -> Result<(), WordleError> {
        let merged = self.constraint.merge(Some(constraint))?;
        let possible_words = filter_words(&self.possible_words, &merged);
        if possible_words.is_empty() {
            return Err(WordleError::InconsistentConstraint);
        }
        self.unguessed_words.retain(|word| word.as_ref() != guess);
        self.guesses.push(Arc::from(guess));
        self.constraint = merged;
        self.possible_words = possible_words;
        self.is_solved = constraint.is_exact_match();
        Ok(())
    }
}

/// Guesses words from the bank until only `answer` can be left.
///
/// The answer is converted to lower case, and must be in the bank. Returns
/// [`WordleError::MissingAnswer`] without guessing anything if no answer is given.
///
/// ```
/// use greedy_wordle_solver::solve;
/// use greedy_wordle_solver::SolverConfig;
/// use greedy_wordle_solver::WordBank;
///
/// let bank = WordBank::from_iterator(["crane", "plane", "plume", "slate"]);
/// let solution = solve(&bank, Some("plume"), SolverConfig::default()).unwrap();
///
/// assert_eq!(solution.answer.as_ref(), "plume");
/// assert!(solution.num_guesses() >= 1);
/// ```
pub fn solve(
    bank: &WordBank,
    answer: Option<&str>,
    config: SolverConfig,
) -> Result<Solution, WordleError> {
    let answer = answer.ok_or(WordleError::MissingAnswer)?.to_lowercase();
    to_letters(&answer)?;
    if !bank.contains(&answer) {
        return Err(WordleError::NotFound);
    }
    let mut solver = Solver::new(bank, config);
    while matches!(solver.state(), SolverState::Start | SolverState::Guessing) {
        let guess = solver
            .select_next_guess()?
            .ok_or(WordleError::InconsistentConstraint)?;
        let constraint = WordConstraint::from_answer(&guess, &answer)?;
        solver.update(&guess, &constraint)?;
        debug!(
            "Guess: {} - Remaining Words: {}",
            guess,
            solver.possible_words().len()
        );
    }
    let answer = solver
        .possible_words()
        .first()
        .map(Arc::clone)
        .ok_or(WordleError::InconsistentConstraint)?;
    Ok(Solution {
        answer,
        guesses: solver.guesses().to_vec(),
    })
}

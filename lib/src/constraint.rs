use crate::data::count_letter;
use crate::data::to_letters;
use crate::data::WORD_LENGTH;
use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::iter::zip;
use std::result::Result;

/// Everything known about the objective word after one or more guesses.
///
/// A constraint is never modified once it has been computed. Knowledge from several guesses is
/// accumulated by [merging](WordConstraint::merge) constraints into a new one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordConstraint {
    /// Letters known to be at each location.
    green: HashMap<usize, char>,
    /// Letters known to be in the word, along with the locations they are known not to be in.
    yellow: HashMap<char, HashSet<usize>>,
    /// Letters known not to be in the word.
    red: HashSet<char>,
    /// The word has fewer than this many of the letter.
    bad_duplicates: HashMap<char, u8>,
    /// The word has at least this many of the letter.
    good_duplicates: HashMap<char, u8>,
}

impl WordConstraint {
    /// Creates a constraint that every word satisfies.
    pub fn new() -> WordConstraint {
        WordConstraint::default()
    }

    /// Returns the constraint learned by guessing `guess` when the objective word is `answer`.
    ///
    /// Letters are processed left to right. Once a letter has been marked as absent, or as
    /// guessed more times than it appears, its later occurrences in the guess are ignored.
    ///
    /// ```
    /// use greedy_wordle_solver::WordConstraint;
    ///
    /// let constraint = WordConstraint::from_answer("sassy", "mesas").unwrap();
    ///
    /// assert_eq!(constraint.green().get(&2), Some(&'s'));
    /// assert_eq!(constraint.bad_duplicates().get(&'s'), Some(&3));
    /// assert!(constraint.is_satisfied_by("mesas"));
    /// ```
    pub fn from_answer(guess: &str, answer: &str) -> Result<WordConstraint, WordleError> {
        let guess_letters = to_letters(guess)?;
        let answer_letters = to_letters(answer)?;
        let mut constraint = WordConstraint::new();
        for (index, letter) in guess_letters.iter().copied().enumerate() {
            if constraint.bad_duplicates.contains_key(&letter) || constraint.red.contains(&letter) {
                continue;
            }
            if !answer_letters.contains(&letter) {
                constraint.red.insert(letter);
                continue;
            }
            if answer_letters[index] == letter {
                constraint.green.insert(index, letter);
                continue;
            }
            let guess_count = count_letter(&guess_letters[..=index], letter);
            let answer_count = count_letter(&answer_letters, letter);
            if answer_count < guess_count {
                constraint.bad_duplicates.insert(letter, guess_count);
                continue;
            } else if guess_count > 1 {
                constraint.good_duplicates.insert(letter, guess_count);
            }
            constraint.yellow.entry(letter).or_default().insert(index);
        }
        Ok(constraint)
    }

    /// Returns the constraint implied by an externally supplied guess result, such as one parsed
    /// with [`GuessResult::from_code`].
    ///
    /// Duplicate-letter bounds only count the green and yellow copies of a letter. A red copy of a
    /// letter that is green or yellow elsewhere in the guess therefore caps the letter's count
    /// instead of excluding it.
    pub fn from_result(result: &GuessResult) -> Result<WordConstraint, WordleError> {
        let letters = to_letters(result.guess)?;
        if result.results.len() != WORD_LENGTH {
            return Err(WordleError::CodeLength {
                expected: WORD_LENGTH,
                actual: result.results.len(),
            });
        }
        let mut constraint = WordConstraint::new();
        for (index, (letter, letter_result)) in
            zip(letters.iter().copied(), result.results.iter()).enumerate()
        {
            match letter_result {
                LetterResult::Correct => {
                    constraint.green.insert(index, letter);
                }
                LetterResult::PresentNotHere => {
                    constraint.yellow.entry(letter).or_default().insert(index);
                    let num_confirmed_before =
                        count_confirmed(&letters[..index], &result.results[..index], letter);
                    if num_confirmed_before > 0 {
                        constraint
                            .good_duplicates
                            .insert(letter, num_confirmed_before + 1);
                    }
                }
                LetterResult::NotPresent => {
                    let num_confirmed = count_confirmed(&letters, &result.results, letter);
                    if num_confirmed == 0 {
                        constraint.red.insert(letter);
                    } else {
                        constraint
                            .bad_duplicates
                            .entry(letter)
                            .or_insert(num_confirmed + 1);
                    }
                }
            }
        }
        Ok(constraint)
    }

    /// Combines this constraint with a `newer` one into a new constraint.
    ///
    /// Merging with `None` returns a copy of this constraint. Otherwise:
    ///
    /// * green letters and red letters are combined, and `newer` wins if both know a location;
    /// * yellow locations are combined per letter;
    /// * the tighter bound is kept for each letter's duplicate counts: the smaller upper bound,
    ///   and the larger lower bound.
    ///
    /// Returns [`WordleError::IncompatibleMerge`] if the result would contradict itself.
    pub fn merge(&self, newer: Option<&WordConstraint>) -> Result<WordConstraint, WordleError> {
        let Some(newer) = newer else {
            return Ok(self.clone());
        };
        let mut merged = self.clone();
        merged.green.extend(newer.green.iter().map(|(i, c)| (*i, *c)));
        merged.red.extend(newer.red.iter().copied());
        for (letter, count) in &newer.bad_duplicates {
            merged
                .bad_duplicates
                .entry(*letter)
                .and_modify(|known| *known = (*known).min(*count))
                .or_insert(*count);
        }
        for (letter, count) in &newer.good_duplicates {
            merged
                .good_duplicates
                .entry(*letter)
                .and_modify(|known| *known = (*known).max(*count))
                .or_insert(*count);
        }
        for (letter, locations) in &newer.yellow {
            merged
                .yellow
                .entry(*letter)
                .or_default()
                .extend(locations.iter().copied());
        }
        if !merged.is_consistent() {
            return Err(WordleError::IncompatibleMerge);
        }
        Ok(merged)
    }

    /// Returns `true` iff the given word satisfies this constraint.
    ///
    /// Yellow letters only rule out the locations they were guessed in. They do not require the
    /// word to contain the letter.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let Ok(letters) = to_letters(word) else {
            return false;
        };
        self.green
            .iter()
            .all(|(index, letter)| letters.get(*index) == Some(letter))
            && self.yellow.iter().all(|(letter, locations)| {
                locations
                    .iter()
                    .all(|index| letters.get(*index) != Some(letter))
            })
            && self.red.iter().all(|letter| !letters.contains(letter))
            && self
                .bad_duplicates
                .iter()
                .all(|(letter, bound)| count_letter(&letters, *letter) < *bound)
            && self
                .good_duplicates
                .iter()
                .all(|(letter, min_count)| count_letter(&letters, *letter) >= *min_count)
    }

    /// Encodes what this constraint says about each letter of `guess` as a guess result.
    ///
    /// For a constraint computed by [`WordConstraint::from_answer`] with the same guess, this
    /// gives back the color code that [`WordConstraint::from_result`] turns into an equal
    /// constraint.
    pub fn results_for_guess<'a>(&self, guess: &'a str) -> Result<GuessResult<'a>, WordleError> {
        let letters = to_letters(guess)?;
        Ok(GuessResult {
            guess,
            results: letters
                .iter()
                .enumerate()
                .map(|(index, letter)| {
                    if self.green.get(&index) == Some(letter) {
                        LetterResult::Correct
                    } else if self
                        .yellow
                        .get(letter)
                        .is_some_and(|locations| locations.contains(&index))
                    {
                        LetterResult::PresentNotHere
                    } else {
                        LetterResult::NotPresent
                    }
                })
                .collect(),
        })
    }

    /// Returns `true` iff every location is known, i.e. the guess was the objective word.
    pub fn is_exact_match(&self) -> bool {
        self.green.len() == WORD_LENGTH
    }

    pub fn green(&self) -> &HashMap<usize, char> {
        &self.green
    }

    pub fn yellow(&self) -> &HashMap<char, HashSet<usize>> {
        &self.yellow
    }

    pub fn red(&self) -> &HashSet<char> {
        &self.red
    }

    pub fn bad_duplicates(&self) -> &HashMap<char, u8> {
        &self.bad_duplicates
    }

    pub fn good_duplicates(&self) -> &HashMap<char, u8> {
        &self.good_duplicates
    }

    /// Returns a copy of this constraint that also knows `letter` is at `index`.
    pub fn with_green(mut self, index: usize, letter: char) -> WordConstraint {
        self.green.insert(index, letter);
        self
    }

    /// Returns a copy of this constraint that also knows `letter` is not at `index`.
    pub fn with_yellow(mut self, letter: char, index: usize) -> WordConstraint {
        self.yellow.entry(letter).or_default().insert(index);
        self
    }

    /// Returns a copy of this constraint that also knows `letter` is not in the word.
    pub fn with_red(mut self, letter: char) -> WordConstraint {
        self.red.insert(letter);
        self
    }

    /// Returns a copy of this constraint that also knows the word has fewer than `bound` copies of
    /// `letter`.
    pub fn with_bad_duplicate(mut self, letter: char, bound: u8) -> WordConstraint {
        self.bad_duplicates.insert(letter, bound);
        self
    }

    /// Returns a copy of this constraint that also knows the word has at least `min_count` copies
    /// of `letter`.
    pub fn with_good_duplicate(mut self, letter: char, min_count: u8) -> WordConstraint {
        self.good_duplicates.insert(letter, min_count);
        self
    }

    fn is_consistent(&self) -> bool {
        self.green.iter().all(|(index, letter)| {
            !self.red.contains(letter)
                && !self
                    .yellow
                    .get(letter)
                    .is_some_and(|locations| locations.contains(index))
        }) && self.good_duplicates.iter().all(|(letter, min_count)| {
            self.bad_duplicates
                .get(letter)
                .map_or(true, |bound| min_count < bound)
        })
    }
}

fn count_confirmed(letters: &[char], results: &[LetterResult], letter: char) -> u8 {
    zip(letters, results)
        .filter(|(other_letter, result)| {
            **other_letter == letter && **result != LetterResult::NotPresent
        })
        .count() as u8
}

impl fmt::Display for WordConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let green: BTreeMap<_, _> = self.green.iter().collect();
        let yellow: BTreeMap<_, BTreeSet<_>> = self
            .yellow
            .iter()
            .map(|(letter, locations)| (letter, locations.iter().collect()))
            .collect();
        let red: BTreeSet<_> = self.red.iter().collect();
        let bad_duplicates: BTreeMap<_, _> = self.bad_duplicates.iter().collect();
        let good_duplicates: BTreeMap<_, _> = self.good_duplicates.iter().collect();
        write!(
            f,
            "green: {:?}, yellow: {:?}, red: {:?}, fewer than: {:?}, at least: {:?}",
            green, yellow, red, bad_duplicates, good_duplicates
        )
    }
}

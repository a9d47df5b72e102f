use crate::data::to_letters;
use crate::data::WORD_LENGTH;
use std::collections::HashMap;
use std::io;
use std::iter::zip;
use std::result::Result;
use thiserror::Error;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum LetterResult {
    /// Green: the letter is in this location.
    Correct,
    /// Yellow: the letter is in the word, but not in this location.
    PresentNotHere,
    /// Red, or blank: the letter is not in the word, or not as many times as it was guessed.
    NotPresent,
}

impl LetterResult {
    /// Parses a single clue symbol, ignoring case.
    ///
    /// * `G` = green
    /// * `Y` = yellow
    /// * `R`, `_`, or `-` = red (blank)
    pub fn from_code_symbol(symbol: char) -> Result<LetterResult, WordleError> {
        match symbol.to_ascii_lowercase() {
            'g' => Ok(LetterResult::Correct),
            'y' => Ok(LetterResult::PresentNotHere),
            'r' | '_' | '-' => Ok(LetterResult::NotPresent),
            _ => Err(WordleError::UnsupportedCode(symbol)),
        }
    }

    /// The symbol used for this result in a color code.
    pub fn to_code_symbol(self) -> char {
        match self {
            LetterResult::Correct => 'G',
            LetterResult::PresentNotHere => 'Y',
            LetterResult::NotPresent => 'R',
        }
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word did not have exactly [`WORD_LENGTH`] letters.
    #[error("words must have exactly 5 letters, but found one with {0}")]
    WordLength(usize),
    /// A color code did not have one symbol per letter in the guess.
    #[error("expected a code with {expected} symbols, but it had {actual}")]
    CodeLength { expected: usize, actual: usize },
    /// A color code contained a symbol other than green, yellow, or red.
    #[error("unsupported code symbol {0:?}; use 'G', 'Y', or 'R' ('_' or '-' also mean red)")]
    UnsupportedCode(char),
    /// Two constraints could not be merged without contradicting each other.
    #[error("the constraints contradict each other and cannot be merged")]
    IncompatibleMerge,
    /// No known word satisfies the accumulated constraint.
    #[error("no known word is consistent with the given results")]
    InconsistentConstraint,
    /// A solve was requested without an objective word.
    #[error("no answer was specified, so it cannot be solved")]
    MissingAnswer,
    /// The objective word is not in the word bank.
    #[error("the answer is not in the word bank")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Parses an externally supplied color code for the given guess, such as `"gyr_Y"`.
    ///
    /// See [`LetterResult::from_code_symbol`] for the accepted symbols.
    pub fn from_code(guess: &'a str, code: &str) -> Result<GuessResult<'a>, WordleError> {
        to_letters(guess)?;
        let num_symbols = code.chars().count();
        if num_symbols != WORD_LENGTH {
            return Err(WordleError::CodeLength {
                expected: WORD_LENGTH,
                actual: num_symbols,
            });
        }
        Ok(GuessResult {
            guess,
            results: code
                .chars()
                .map(LetterResult::from_code_symbol)
                .collect::<Result<Vec<LetterResult>, WordleError>>()?,
        })
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Formats the results as a color code, e.g. `"GYRRG"`.
    pub fn to_code(&self) -> String {
        self.results
            .iter()
            .map(|result| result.to_code_symbol())
            .collect()
    }

    /// Formats the results the way a human player would read them: an uppercase letter is in the
    /// right place, a lowercase letter is elsewhere in the word, and `-` is not in the word.
    pub fn to_response(&self) -> String {
        zip(self.guess.chars(), self.results.iter())
            .map(|(letter, result)| match result {
                LetterResult::Correct => letter.to_ascii_uppercase(),
                LetterResult::PresentNotHere => letter.to_ascii_lowercase(),
                LetterResult::NotPresent => '-',
            })
            .collect()
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Letters in the right place are marked first. Each remaining guessed letter is then marked as
/// present only while the objective still has an unmatched copy of it, from left to right.
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_letters = to_letters(objective)?;
    let guess_letters = to_letters(guess)?;
    let mut results = vec![LetterResult::NotPresent; WORD_LENGTH];
    let mut unmatched: HashMap<char, u8> = HashMap::new();
    for (index, (guess_letter, objective_letter)) in
        zip(guess_letters.iter(), objective_letters.iter()).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unmatched.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }
    Ok(GuessResult { guess, results })
}

/// Returns the response a human player would see for `guess` when the word is `answer`.
///
/// ```
/// use greedy_wordle_solver::manual_guess;
///
/// assert_eq!(manual_guess("Sassy", "mesas").unwrap(), "saS--");
/// ```
pub fn manual_guess(guess: &str, answer: &str) -> Result<String, WordleError> {
    let guess = guess.to_lowercase();
    let answer = answer.to_lowercase();
    Ok(get_result_for_guess(&answer, &guess)?.to_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_result_from_code_symbol_ignores_case() {
        assert_eq!(
            LetterResult::from_code_symbol('G').unwrap(),
            LetterResult::Correct
        );
        assert_eq!(
            LetterResult::from_code_symbol('y').unwrap(),
            LetterResult::PresentNotHere
        );
        assert_eq!(
            LetterResult::from_code_symbol('r').unwrap(),
            LetterResult::NotPresent
        );
        assert_eq!(
            LetterResult::from_code_symbol('_').unwrap(),
            LetterResult::NotPresent
        );
        assert!(matches!(
            LetterResult::from_code_symbol('x'),
            Err(WordleError::UnsupportedCode('x'))
        ));
    }

    #[test]
    fn guess_result_to_response() {
        let result = GuessResult {
            guess: "sassy",
            results: vec![
                LetterResult::PresentNotHere,
                LetterResult::PresentNotHere,
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ],
        };

        assert_eq!(result.to_response(), "saS--");
        assert_eq!(result.to_code(), "YYGRR");
        assert!(!result.is_correct());
    }
}

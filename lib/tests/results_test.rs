#[macro_use]
extern crate assert_matches;

use greedy_wordle_solver::*;

#[test]
fn get_result_for_guess_correct() {
    let result = get_result_for_guess("abcbd", "abcbd");

    assert_matches!(
        result,
        Ok(GuessResult {
            guess: "abcbd",
            results: _,
        })
    );
    assert_eq!(result.unwrap().results, vec![LetterResult::Correct; 5]);
}

#[test]
fn get_result_for_guess_partial() {
    let result = get_result_for_guess("mesas", "sassy");
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );

    let result = get_result_for_guess("abbad", "babbz");
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );

    let result = get_result_for_guess("abcbe", "bccex");
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::Correct,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent
        ]
    );
}

#[test]
fn get_result_for_guess_none_match() {
    let result = get_result_for_guess("abcbd", "efghi");

    assert_eq!(result.unwrap().results, vec![LetterResult::NotPresent; 5]);
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goals", "goal"),
        Err(WordleError::WordLength(4))
    );
}

#[test]
fn guess_result_from_code_ignores_case() -> Result<(), WordleError> {
    let result = GuessResult::from_code("crane", "gYr_-")?;

    assert_eq!(
        result.results,
        vec![
            LetterResult::Correct,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );
    assert_eq!(result.to_code(), "GYRRR");
    Ok(())
}

#[test]
fn guess_result_from_code_malformed() {
    assert_matches!(
        GuessResult::from_code("crane", "gyr"),
        Err(WordleError::CodeLength {
            expected: 5,
            actual: 3
        })
    );
    assert_matches!(
        GuessResult::from_code("crane", "gyrgx"),
        Err(WordleError::UnsupportedCode('x'))
    );
    assert_matches!(
        GuessResult::from_code("cranes", "gyrgg"),
        Err(WordleError::WordLength(6))
    );
}

#[test]
fn manual_guess_responses() -> Result<(), WordleError> {
    assert_eq!(manual_guess("Sassy", "mesas")?, "saS--");
    assert_eq!(manual_guess("crane", "crane")?, "CRANE");
    assert_eq!(manual_guess("speed", "creep")?, "-pEE-");
    assert_eq!(manual_guess("plumb", "tares")?, "-----");
    Ok(())
}

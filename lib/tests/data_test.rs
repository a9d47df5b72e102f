use greedy_wordle_solver::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec,
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<str>>>()
        );
    };
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), WordleError> {
    let mut cursor = Cursor::new(String::from("\n\nworda\n wordb\n"));

    let word_bank = WordBank::from_reader(&mut cursor)?;

    assert_eq!(word_bank.len(), 2);
    assert_arc_eq!(word_bank.to_vec(), ["worda", "wordb"]);
    Ok(())
}

#[test]
fn word_bank_from_iterator_succeeds() {
    let word_bank = WordBank::from_iterator(vec!["", "worda", "Wordb "]);

    assert_eq!(word_bank.len(), 2);
    assert_arc_eq!(word_bank.to_vec(), ["worda", "wordb"]);
}

#[test]
fn word_bank_from_string_iterator_skips_other_lengths() {
    let word_bank = WordBank::from_iterator(vec![
        "".to_string(),
        "worda".to_string(),
        "word".to_string(),
        "wordbs".to_string(),
    ]);

    assert_eq!(word_bank.len(), 1);
    assert_eq!(word_bank[0].as_ref(), "worda");
    assert!(!word_bank.is_empty());
}

#[test]
fn filter_words_preserves_order() -> Result<(), WordleError> {
    let word_bank = WordBank::from_iterator(["plume", "crane", "plumb", "plane", "slate"]);
    let constraint = WordConstraint::from_answer("tares", "plane")?;

    assert_arc_eq!(
        filter_words(&word_bank, &constraint),
        ["plume", "plumb", "plane"]
    );
    Ok(())
}

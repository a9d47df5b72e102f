use crate::constraint::WordConstraint;
use crate::results::WordleError;
use log::debug;
use std::io;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// Splits the word into its letters, failing if it does not have exactly [`WORD_LENGTH`] letters.
pub(crate) fn to_letters(word: &str) -> Result<[char; WORD_LENGTH], WordleError> {
    let mut letters = [' '; WORD_LENGTH];
    let mut num_letters = 0;
    for letter in word.chars() {
        if num_letters < WORD_LENGTH {
            letters[num_letters] = letter;
        }
        num_letters += 1;
    }
    if num_letters != WORD_LENGTH {
        return Err(WordleError::WordLength(num_letters));
    }
    Ok(letters)
}

/// Counts the number of times `letter` appears in `letters`.
pub(crate) fn count_letter(letters: &[char], letter: char) -> u8 {
    letters
        .iter()
        .filter(|other_letter| **other_letter == letter)
        .count() as u8
}

/// Contains all the possible words for this Wordle game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. See [`WordBank::from_iterator`] for how each
    /// word is cleaned up.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(WordBank::from_iterator(words))
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case. Empty lines and words that do not have
    /// exactly [`WORD_LENGTH`] letters are skipped.
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let mut num_skipped = 0;
        let all_words: Vec<Arc<str>> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                if word.chars().count() != WORD_LENGTH {
                    num_skipped += 1;
                    return None;
                }
                Some(Arc::from(word.to_lowercase().as_str()))
            })
            .collect();
        if num_skipped > 0 {
            debug!(
                "Skipped {} words that do not have {} letters.",
                num_skipped, WORD_LENGTH
            );
        }
        WordBank { all_words }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns `true` iff the given word is in the bank.
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|known| known.as_ref() == word)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Returns the words that satisfy the given constraint, in their original order.
pub fn filter_words(words: &[Arc<str>], constraint: &WordConstraint) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| constraint.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

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

    fn words() -> WordBank {
        WordBank::from_iterator(["worda", "wordb", "other", "smore"])
    }

    #[test]
    fn to_letters_checks_length() {
        assert_eq!(to_letters("hello").unwrap(), ['h', 'e', 'l', 'l', 'o']);
        assert!(matches!(to_letters("hi"), Err(WordleError::WordLength(2))));
        assert!(matches!(
            to_letters("toolong"),
            Err(WordleError::WordLength(7))
        ));
    }

    #[test]
    fn count_letter_counts_repeats() {
        let letters = to_letters("sassy").unwrap();

        assert_eq!(count_letter(&letters, 's'), 3);
        assert_eq!(count_letter(&letters, 'y'), 1);
        assert_eq!(count_letter(&letters, 'z'), 0);
    }

    #[test]
    fn word_bank_from_reader_skips_other_lengths() -> Result<(), WordleError> {
        let cursor = Cursor::new(String::from("\nWorda\n  wordb \nhi\nlonger\n"));

        let bank = WordBank::from_reader(cursor)?;

        assert_arc_eq!(bank.to_vec(), vec!["worda", "wordb"]);
        assert!(bank.contains("wordb"));
        assert!(!bank.contains("hi"));
        Ok(())
    }

    #[test]
    fn filter_words_green() {
        let constraint = WordConstraint::new().with_green(1, 'o').with_green(4, 'b');

        assert_arc_eq!(filter_words(&words(), &constraint), vec!["wordb"]);
    }

    #[test]
    fn filter_words_yellow_only_excludes_position() {
        let constraint = WordConstraint::new().with_yellow('o', 0);

        assert_arc_eq!(
            filter_words(&words(), &constraint),
            vec!["worda", "wordb", "smore"]
        );
    }

    #[test]
    fn filter_words_red() {
        let constraint = WordConstraint::new().with_red('w');

        assert_arc_eq!(filter_words(&words(), &constraint), vec!["other", "smore"]);
    }

    #[test]
    fn filter_words_duplicate_bounds() {
        let bank = WordBank::from_iterator(["geese", "eerie", "crane", "there"]);

        let at_least_two = WordConstraint::new().with_good_duplicate('e', 2);
        assert_arc_eq!(
            filter_words(&bank, &at_least_two),
            vec!["geese", "eerie", "there"]
        );

        let fewer_than_three = WordConstraint::new().with_bad_duplicate('e', 3);
        assert_arc_eq!(
            filter_words(&bank, &fewer_than_three),
            vec!["crane", "there"]
        );
    }

    #[test]
    fn filter_words_no_match() {
        let constraint = WordConstraint::new()
            .with_green(1, 'o')
            .with_yellow('b', 4)
            .with_red('w');

        assert!(filter_words(&words(), &constraint).is_empty());
    }
}

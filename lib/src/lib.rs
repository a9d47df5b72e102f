//! Solves Wordle by always guessing the word that leaves the fewest possible words on average.
//!
//! ```
//! use greedy_wordle_solver::*;
//!
//! let bank = WordBank::from_iterator(["crane", "plane", "plume", "slate", "tares"]);
//! let solution = solve(&bank, Some("plane"), SolverConfig::default()).unwrap();
//!
//! assert_eq!(solution.answer.as_ref(), "plane");
//! ```

mod constraint;
mod data;
mod engine;
mod results;
pub mod scorers;

pub use constraint::WordConstraint;
pub use data::filter_words;
pub use data::WordBank;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use results::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use greedy_wordle_solver::*;
use log::{info, warn};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Number of alternative guesses shown during an interactive game.
const NUM_ALTERNATIVES: usize = 5;

/// Plays Wordle in reverse: the computer guesses the word, always picking the guess that is
/// expected to leave the fewest possible words.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// The first word to guess in every game.
    #[arg(long, default_value = DEFAULT_OPENING_GUESS)]
    opening_guess: String,

    /// Score guesses on a single thread.
    #[arg(long)]
    single_threaded: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the given word and print each guess.
    Single { word: String },
    /// Solve every word in the words file, and print how many guesses were needed.
    Benchmark {
        /// Only solve this many words, chosen at random.
        #[arg(short = 'n', long)]
        sample: Option<usize>,
    },
    /// Run an interactive game, where you score the solver's guesses.
    Interactive,
    /// Print the response a player would see for the guess, e.g. `saS--`.
    Check { guess: String, answer: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    info!("Words file: {}", args.words_file.display());

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("Could not open {}", args.words_file.display()))?,
    );
    let word_bank = WordBank::from_reader(words_reader)
        .with_context(|| format!("Could not read {}", args.words_file.display()))?;
    println!("There are {} possible words.", word_bank.len());

    let config = SolverConfig {
        opening_guess: args.opening_guess.to_lowercase().into_boxed_str(),
        parallel: !args.single_threaded,
    };

    match args.command {
        Command::Single { word } => play_single_game(&word, &word_bank, config)?,
        Command::Benchmark { sample } => run_benchmark(&word_bank, sample, config)?,
        Command::Interactive => play_interactive_game(&word_bank, config)?,
        Command::Check { guess, answer } => check_guess(&guess, &answer, &word_bank)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(word_bank: &WordBank, sample: Option<usize>, config: SolverConfig) -> Result<()> {
    let answers: Vec<&Arc<str>> = match sample {
        Some(sample_size) => word_bank
            .choose_multiple(&mut rand::thread_rng(), sample_size)
            .collect(),
        None => word_bank.iter().collect(),
    };

    let mut num_guesses_per_game: Vec<usize> = Vec::with_capacity(answers.len());
    for answer in answers {
        let solution = solve(word_bank, Some(answer.as_ref()), config.clone())
            .with_context(|| format!("Could not solve {}", answer))?;
        num_guesses_per_game.push(solution.num_guesses());
    }
    if num_guesses_per_game.is_empty() {
        println!("There were no words to solve.");
        return Ok(());
    }
    println!("Solved {} words. Results:", num_guesses_per_game.len());

    let mut num_games_per_round: HashMap<usize, usize> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<(&usize, &usize)> = num_games_per_round.iter().collect();
    num_rounds.sort_unstable();
    for (num_round, num_games) in num_rounds {
        println!("|{}|{}|", num_round, num_games);
    }

    let average: f64 =
        num_guesses_per_game.iter().sum::<usize>() as f64 / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(word: &str, word_bank: &WordBank, config: SolverConfig) -> Result<()> {
    let solution = solve(word_bank, Some(word), config)
        .with_context(|| format!("Could not solve {}", word))?;
    println!(
        "Solved it! The word is {}. It took me {} guesses.",
        solution.answer,
        solution.num_guesses()
    );
    for guess in solution.guesses.iter() {
        println!("\t{}", guess);
    }
    Ok(())
}

fn play_interactive_game(word_bank: &WordBank, config: SolverConfig) -> Result<()> {
    let mut solver = Solver::new(word_bank, config);
    println!("Choose a word from the word-list. Press enter once you've chosen.");
    read_line()?;

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * 'R', '_' or '-' = this letter is not in the word\n\
           * 'Y' = this letter is in the word, but not in this location\n\
           * 'G' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"GRGYR\"."
    );

    while let Some(guess) = select_guess_with_alternatives(&solver)? {
        println!("I'm guessing: {}. How did I do?", guess);
        let is_correct = loop {
            let code = read_line()?;
            match apply_code(&mut solver, &guess, code.trim()) {
                Ok(is_correct) => break is_correct,
                Err(e) => println!("{} Try again.", e),
            }
        };
        if is_correct {
            break;
        }
        println!("So far I know: {}", solver.constraint());
    }

    println!("I did it! It took me {} guesses.", solver.guesses().len());
    Ok(())
}

fn select_guess_with_alternatives(solver: &Solver) -> Result<Option<Arc<str>>> {
    if solver.state() != SolverState::Guessing {
        return Ok(solver.select_next_guess()?);
    }
    let top_guesses = solver.select_top_n_guesses(NUM_ALTERNATIVES)?;
    println!(
        "{} words are still possible. My best guesses are:",
        solver.possible_words().len()
    );
    for scored in top_guesses.iter() {
        println!(
            "\t{} ({:.2} words expected to remain)",
            scored.guess, scored.expected_remaining
        );
    }
    match top_guesses.first() {
        Some(best) => Ok(Some(Arc::clone(&best.guess))),
        None => Ok(solver.select_next_guess()?),
    }
}

/// Returns `true` iff the code says the guess was the objective word.
fn apply_code(solver: &mut Solver, guess: &str, code: &str) -> Result<bool, WordleError> {
    let result = GuessResult::from_code(guess, code)?;
    let constraint = WordConstraint::from_result(&result)?;
    solver.update(guess, &constraint)?;
    Ok(result.is_correct())
}

fn check_guess(guess: &str, answer: &str, word_bank: &WordBank) -> Result<()> {
    if !word_bank.contains(&guess.to_lowercase()) {
        warn!("{} is not in the word list.", guess);
    }
    println!("{}", manual_guess(guess, answer)?);
    Ok(())
}

fn read_line() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .context("Could not read from stdin")?;
    Ok(buffer)
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use twentyfour::{Deck, GameSession, Hand, HintSolver, hint, verify};

/// Verbosity of the diagnostics written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Twentyfour - make 24 from four playing cards
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Combine four card values with + - * / and parentheses to make 24")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal four cards from a shuffled deck
    Deal {
        /// Seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check an expression against a hand, e.g. `verify 4,6,2,8 "(4+8)*(6-2)"`
    Verify {
        /// Four card values from 1 to 13, separated by commas
        hand: String,
        /// Arithmetic expression using each value exactly once
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Show one expression that makes 24
    Hint {
        /// Four card values from 1 to 13, separated by commas
        hand: String,
    },
    /// List every expression the solver finds
    Solutions {
        /// Four card values from 1 to 13, separated by commas
        hand: String,
    },
    /// Play interactively: type expressions, or `hint`, `new`, `quit`
    Play {
        /// Seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Parse and validate a hand given on the command line
pub fn parse_hand(raw: &str) -> Result<Hand> {
    raw.parse::<Hand>()
        .with_context(|| format!("Invalid hand '{}'", raw))
}

/// Route `log` output to stderr. `RUST_LOG` directives still apply per module.
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn write_cards<R: Rng, W: Write>(session: &GameSession<R>, out: &mut W) -> Result<()> {
    let names: Vec<String> = session.cards().iter().map(|c| c.to_string()).collect();
    writeln!(out, "Cards: {}", names.join(", "))?;
    writeln!(out, "Values: {}", session.hand())?;
    Ok(())
}

/// Run the interactive loop until `quit` or end of input
pub fn play<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    input: I,
    out: &mut W,
) -> Result<()> {
    write_cards(session, out)?;
    writeln!(out, "Enter an expression, or one of: hint, new, quit")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match line.trim() {
            "quit" | "exit" => break,
            "hint" => writeln!(out, "Hint: {}", session.hint())?,
            "new" => {
                session.new_hand();
                write_cards(session, out)?;
            }
            expression => {
                let outcome = session.verify(expression);
                writeln!(out, "{}: {}", outcome.title(), outcome.message())?;
            }
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(args.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Deal { seed } => {
            let dealt = Deck::standard().deal(&mut make_rng(seed));
            for card in dealt.cards() {
                writeln!(out, "{} ({})", card, card.value())?;
            }
            writeln!(out, "Values: {}", dealt.hand())?;
        }
        Command::Verify { hand, expression } => {
            let hand = parse_hand(&hand)?;
            let outcome = verify(&hand, &expression);
            writeln!(out, "{}: {}", outcome.title(), outcome.message())?;
        }
        Command::Hint { hand } => {
            let hand = parse_hand(&hand)?;
            let result = hint(&hand);
            if !result.is_found() {
                warn!("No matching expression found for {}", hand);
            }
            writeln!(out, "{}", result)?;
        }
        Command::Solutions { hand } => {
            let hand = parse_hand(&hand)?;
            let solutions = HintSolver::new().solutions(&hand);
            if solutions.is_empty() {
                warn!("No matching expression found for {}", hand);
                writeln!(out, "No solution found")?;
            }
            for expression in solutions {
                writeln!(out, "{}", expression)?;
            }
        }
        Command::Play { seed } => {
            let mut session = GameSession::new(make_rng(seed));
            play(&mut session, io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}

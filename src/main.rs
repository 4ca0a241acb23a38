//! Tally - command-line front end for the calculator core.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tally::config::Settings;
use tally::core::History;
use tally::storage::FileStore;
use tally::{logging, Calculator};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Basic calculator with a persisted history", version)]
struct Args {
    /// Settings file (default: <config_dir>/tally/settings.toml)
    #[arg(long, global = true, env = "TALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for stored history (overrides settings)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Press each symbol in order and print the display
    Tap {
        /// Keypad symbols: 0-9 . C ± % + − × ÷ = (ASCII - * / also accepted)
        #[arg(required = true, allow_hyphen_values = true)]
        symbols: Vec<String>,
    },
    /// Read symbols from stdin, one line at a time
    Repl,
    /// Inspect or edit the stored history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Print every entry, newest first
    List,
    /// Remove every entry
    Clear,
    /// Remove the entries at the given positions (as shown by `list`)
    Delete {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .map_err(|e| anyhow::anyhow!("failed to load settings: {e}"))?;

    if let Some(dir) = args.data_dir {
        settings.data_dir = dir;
    }
    if args.verbose {
        settings.logging.default = "debug".to_string();
    }
    logging::init_with_config(&settings.logging);

    let storage = FileStore::new(&settings.data_dir);
    let mut calc = Calculator::open(storage, &settings);

    match args.command.unwrap_or(Command::Repl) {
        Command::Tap { symbols } => {
            for symbol in &symbols {
                calc.tap(symbol);
            }
            println!("{}", calc.display());
        }
        Command::Repl => repl(&mut calc)?,
        Command::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => print_history(calc.history()),
            HistoryAction::Clear => {
                calc.clear_history();
                println!("History cleared.");
            }
            HistoryAction::Delete { indices } => {
                let before = calc.history().len();
                calc.delete_history(&indices);
                println!("Removed {} entries.", before - calc.history().len());
            }
        },
    }

    Ok(())
}

fn repl(calc: &mut Calculator<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", calc.display());
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.trim() {
            "quit" | "exit" => break,
            "history" => print_history(calc.history()),
            "clear-history" => {
                calc.clear_history();
                println!("History cleared.");
            }
            tokens => {
                for token in tokens.split_whitespace() {
                    calc.tap(token);
                }
                println!("{}", calc.display());
            }
        }
        stdout.flush().context("failed to write stdout")?;
    }
    Ok(())
}

fn print_history(history: &History) {
    if history.is_empty() {
        println!("No history yet.");
        return;
    }
    for (index, item) in history.iter().enumerate() {
        let local = item.timestamp.with_timezone(&chrono::Local);
        println!(
            "#{index:<3} {} = {}  {}",
            item.expression,
            item.result,
            local.format("%b %e, %Y %H:%M:%S")
        );
    }
}

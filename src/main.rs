use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::HistoryEntry;
use zcalc::config::Config;
use zcalc::session::Session;

/// Keypad calculator evaluating strictly left to right.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Args {
    /// Config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Press these keys, print the display and exit, e.g. "5 + 3 ="
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the calculation history as JSON before exiting
    #[arg(long)]
    history: bool,

    /// Copy the display to the clipboard after every "="
    #[arg(long)]
    copy: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(args.config.as_deref())?;
    let copy_results = args.copy || config.clipboard.copy_results;
    let mut session = Session::new(&config).with_copy_results(copy_results);

    match &args.keys {
        Some(keys) => println!("{}", session.press_keys(keys)),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                info!("type keys then Enter, :help for help");
            }
            session.run(stdin.lock(), io::stdout().lock())?;
        }
    }

    if args.history {
        let entries: Vec<&HistoryEntry> = session.calculator().history().iter().collect();
        let json =
            serde_json::to_string_pretty(&entries).context("Failed to serialize history")?;
        println!("{}", json);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "zcalc=debug",
        _ => "zcalc=trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

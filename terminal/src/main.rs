mod config;
mod input;
mod menu;
mod runner;

use std::io;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};

use config::{DEFAULT_CONFIG_PATH, get_config_manager};
use runner::TerminalGame;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Seed for the easy and medium players. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config back to the config file.
    #[arg(long)]
    save_config: bool,

    /// Log diagnostics to stderr.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("TicTacToe".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config);
    }

    let rng = config
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    log!("Session seed {}", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    TerminalGame::new(stdin.lock(), stdout.lock(), rng, config).run()?;

    Ok(())
}

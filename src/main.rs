use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;

use czech_draughts::cli::{self, logger, Args, GameOptions, DEBUG_ENV};

fn main() -> ExitCode {
    let args = Args::parse();
    let debug_env = env::var(DEBUG_ENV).ok();
    let options = GameOptions::from_sources(debug_env.as_deref(), &args);
    logger::init(options.log_level());

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    match cli::run_game_loop(&mut input, &mut output, &options) {
        Ok(end) => {
            log::info!("session ended: {end:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use log::LevelFilter;

/// Environment variable that switches on debug logging (`1` or `true`).
pub const DEBUG_ENV: &str = "DRAUGHTS_DEBUG";

/// Command-line arguments of the console game.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "czech_draughts", version, about = "Two-player Czech draughts in the terminal")]
pub struct Args {
    /// Trace the rules engine's decisions on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Do not print the board before every prompt
    #[arg(long)]
    pub no_board: bool,
}

/// Session settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Trace the rules engine's decisions on stderr
    pub debug: bool,
    /// Print the board before every prompt
    pub show_board: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            debug: false,
            show_board: true,
        }
    }
}

impl GameOptions {
    /// Combine parsed arguments with the debug environment variable. The
    /// variable can only switch debugging on.
    #[must_use]
    pub fn from_sources(debug_env: Option<&str>, args: &Args) -> Self {
        let env_debug = debug_env.is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });

        GameOptions {
            debug: args.debug || env_debug,
            show_board: !args.no_board,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Error
        }
    }
}

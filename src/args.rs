use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "Tennis Elo Rating Processor",
    long_about = "Replays a tennis match history through a surface-aware Elo model to \
    annotate, evaluate, tune, and serve pairwise win predictions"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Replay the match history and write per-match delta/probability annotations
    Annotate {
        /// Chronological match history, one JSON record per line
        #[arg(short, long)]
        matches: PathBuf,

        /// Output path for the annotations (JSON lines, parallel to the input)
        #[arg(short, long)]
        out: PathBuf,

        /// Optional tuned configuration line; defaults otherwise
        #[arg(short, long)]
        config: Option<PathBuf>
    },

    /// Annotate the history and print symmetric log-loss, Brier score, and accuracy
    Evaluate {
        #[arg(short, long)]
        matches: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>
    },

    /// Grid-search hyperparameters against a held-out year window
    Tune {
        #[arg(short, long)]
        matches: PathBuf,

        /// Where to persist the best configuration line
        #[arg(short, long)]
        out: PathBuf,

        /// First year of the inclusive validation window
        #[arg(long, default_value_t = crate::model::constants::VALIDATION_YEAR_FROM)]
        from_year: i32,

        /// Last year of the inclusive validation window
        #[arg(long, default_value_t = crate::model::constants::VALIDATION_YEAR_TO)]
        to_year: i32
    },

    /// Build the engine from the full history and predict a single matchup
    Predict {
        #[arg(short, long)]
        matches: PathBuf,

        /// Tuned configuration line from a prior `tune` run
        #[arg(short, long)]
        config: PathBuf,

        /// First player's name
        #[arg(short = 'a', long)]
        player_a: String,

        /// Second player's name
        #[arg(short = 'b', long)]
        player_b: String,

        /// Surface (hard, clay, grass; unrecognized values fall back to hard)
        #[arg(short, long, default_value = "hard")]
        surface: String
    }
}

//! Command-line interface for flip.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flip - match pairs of hidden tiles before the tries run out
#[derive(Parser, Debug)]
#[command(name = "flip")]
#[command(about = "Terminal memory game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Side length of the square board (overrides the config file)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Seed for reproducible boards (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to the TOML config file (used only if it exists)
        #[arg(short, long, default_value = "flip.toml")]
        config: PathBuf,
    },

    /// Print the rules and controls
    Rules,
}

/// Welcome text shown by `flip rules`.
pub const RULES: &str = "\
Welcome to the Memory Game!

The goal is to match pairs of identical numbers.
You have a limited number of tries: one less than the number of tiles.
Flip a tile, then flip a second one. A matching pair stays face up;
a mismatch flips back after a short delay and costs a try.
Run out of tries and the game is over, even on the final pair.

Controls:
  arrows / hjkl   move the cursor
  Enter / Space   flip the tile under the cursor
  r               restart with a new board
  q / Esc         quit

Good luck!";

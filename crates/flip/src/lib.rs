//! Flip - terminal shell for the memory game.
//!
//! Parses the command line, loads `flip.toml`, and drives a
//! [`flip_core::Engine`] from keyboard input, arming a one-shot timer for
//! every mismatched pair.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use cli::{Cli, Command, RULES};
pub use config::{ConfigError, FlipConfig};

//! Marque CLI - Command-line interface
//!
//! This crate provides the `marque` binary:
//! - `list` / `show`: browse the agent roster
//! - `compose`: print the prompt an agent would send
//! - `run`: execute one agent task against Gemini

pub mod commands;
pub mod config;

pub use commands::{Cli, Commands, TaskArgs};
pub use config::CliConfig;

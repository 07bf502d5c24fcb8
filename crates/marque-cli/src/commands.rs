//! CLI commands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Marque - brand and marketing agents on top of Gemini
#[derive(Parser, Debug)]
#[command(name = "marque")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: marque.{jsonc,json,yml,yaml} or ~/.config/marque/)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use (e.g., gemini-2.5-flash, gemini-2.5-pro)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all agents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one agent
    Show {
        /// Agent id (e.g., copywriter, brand-guardian)
        agent: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt an agent would send, without calling the model
    Compose {
        #[command(flatten)]
        task: TaskArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an agent task and print the result
    Run {
        #[command(flatten)]
        task: TaskArgs,

        /// Output the typed task result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Agent id (e.g., copywriter, brand-guardian)
    pub agent: String,

    /// Task input (read from stdin if omitted)
    #[arg(trailing_var_arg = true)]
    pub input: Vec<String>,

    /// JSON file with brand rules (voiceDescriptors plus any other attributes)
    #[arg(long)]
    pub brand: Option<PathBuf>,

    /// Voice descriptor to prioritize; repeatable
    #[arg(long = "voice")]
    pub voices: Vec<String>,
}

impl TaskArgs {
    pub fn get_input(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}

//! CLI command definitions

use askdesk_domain::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sample question sent by `check` when none is given
pub const DEFAULT_CHECK_QUESTION: &str = "When is the application deadline?";

/// CLI arguments for askdesk
#[derive(Parser, Debug)]
#[command(name = "askdesk")]
#[command(author, version, about = "Ask questions to a retrieval-augmented answer server")]
#[command(long_about = r#"
askdesk is a terminal front-end for a question/answer server.

It sends your question to the server's /ask endpoint and shows the answer.
When the server is not confident, a link to a human-staffed contact form is
shown as well (the link comes from /config_public).

Configuration files are loaded from (in priority order):
1. ASKDESK_* environment variables (e.g. ASKDESK_SERVER__BASE_URL)
2. --config <path>     Explicit config file
3. ./askdesk.toml      Project-level config
4. ~/.config/askdesk/config.toml   Global config

Example:
  askdesk ask "When is the application deadline?"
  askdesk chat --locale ja
  askdesk acceptance --file docs/acceptance_test.yml
  askdesk check --base-url http://localhost:8000
"#)]
pub struct Cli {
    /// What to do (defaults to interactive chat)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the answer server
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Language of the fixed messages (en, ja)
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Request timeout in seconds (acceptance runs: per case)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// The question (words are joined with spaces)
        question: Vec<String>,

        /// Print the final view state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask questions interactively
    Chat,

    /// Run acceptance cases against the answer endpoint
    Acceptance {
        /// YAML file with the cases
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Probe the health endpoint and send one sample question
    Check {
        /// Sample question to send
        #[arg(long, default_value = DEFAULT_CHECK_QUESTION)]
        question: String,
    },
}

//! Presentation layer for askdesk
//!
//! This crate contains the CLI definition, the terminal implementation of
//! the answer view, output formatters, the acceptance reporter and the
//! interactive chat interface.

pub mod acceptance;
pub mod chat;
pub mod cli;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use acceptance::reporter::AcceptanceReporter;
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use view::console::ConsoleView;

//! Interactive chat module
//!
//! Provides a readline-based interactive question interface.

mod repl;

pub use repl::ChatRepl;

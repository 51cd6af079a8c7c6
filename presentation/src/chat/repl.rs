//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::view::console::ConsoleView;
use askdesk_application::{AskApi, RequestController, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive question REPL
///
/// Each line is one submission. The next line is only read once the
/// previous submission has settled, which is the terminal equivalent of the
/// disabled submit button.
pub struct ChatRepl<A: AskApi + 'static> {
    controller: RequestController<A, ConsoleView>,
    history_file: Option<PathBuf>,
}

impl<A: AskApi + 'static> ChatRepl<A> {
    /// Create a new ChatRepl around an initialized controller
    pub fn new(controller: RequestController<A, ConsoleView>) -> Self {
        Self {
            controller,
            history_file: dirs::data_dir().map(|p| p.join("askdesk").join("history.txt")),
        }
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    if !line.is_empty() {
                        let _ = rl.add_history_entry(line);
                    }

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               askdesk - Q&A                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a question and press Enter.");
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /link            - Show the contact form link");
        println!("  /quit, /exit, /q - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
                false
            }
            "/link" => {
                println!("{}", self.controller.view().snapshot().form_link);
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        if self.controller.submit(question).await == SubmitOutcome::Ignored {
            return;
        }
        println!();
        print!("{}", self.controller.view().render());
        println!();
    }
}

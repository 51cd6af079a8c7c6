//! CLI entrypoint for askdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use askdesk_application::{
    CheckApiUseCase, RequestController, RunAcceptanceUseCase, SubmitOutcome,
};
use askdesk_domain::Question;
use askdesk_infrastructure::{
    AcceptanceSuiteLoader, ConfigLoader, FileConfig, HttpAskClient, SuiteLoadError,
};
use askdesk_presentation::{
    AcceptanceReporter, ChatRepl, Cli, Command, ConsoleFormatter, ConsoleView,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit code for an unusable acceptance case file
const EXIT_BAD_CASE_FILE: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Answers go to stdout; keep logs out of the way
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let command = cli.command.clone().unwrap_or(Command::Chat);
    apply_cli_overrides(&mut config, &cli, &command);
    config.validate().context("Invalid configuration")?;

    if !config.ui.color {
        colored::control::set_override(false);
    }

    info!("Starting askdesk against {}", config.server.base_url);

    match command {
        Command::Ask { question, json } => run_ask(&config, &question.join(" "), json).await,
        Command::Chat => run_chat(&config).await,
        Command::Acceptance { file } => run_acceptance(&config, file).await,
        Command::Check { question } => run_check(&config, &question).await,
    }
}

/// Command-line flags win over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli, command: &Command) {
    if let Some(base_url) = &cli.base_url {
        config.server.base_url = base_url.clone();
    }
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    if let Some(timeout) = cli.timeout {
        match command {
            Command::Acceptance { .. } => config.acceptance.timeout_seconds = timeout,
            _ => config.server.timeout_seconds = Some(timeout),
        }
    }
    if cli.quiet {
        config.ui.show_progress = false;
    }
    if cli.no_color {
        config.ui.color = false;
    }
}

// === Dependency Injection ===

fn build_controller(
    config: &FileConfig,
    show_progress: bool,
) -> Result<RequestController<HttpAskClient, ConsoleView>> {
    let locale = config.ui.locale;
    let api = Arc::new(HttpAskClient::new(&config.server, locale)?);
    let view = Arc::new(
        ConsoleView::new(config.ui.default_form_url.clone(), locale).with_progress(show_progress),
    );
    Ok(RequestController::new(api, view).with_locale(locale))
}

async fn run_ask(config: &FileConfig, question: &str, json: bool) -> Result<ExitCode> {
    let controller = build_controller(config, config.ui.show_progress && !json)?;
    controller.initialize().await;

    let outcome = controller.submit(question).await;

    if json {
        println!(
            "{}",
            ConsoleFormatter::format_view_json(&controller.view().snapshot())
        );
    } else {
        print!("{}", controller.view().render());
    }

    Ok(match outcome {
        SubmitOutcome::Failed => ExitCode::FAILURE,
        SubmitOutcome::Answered(_) | SubmitOutcome::Ignored => ExitCode::SUCCESS,
    })
}

async fn run_chat(config: &FileConfig) -> Result<ExitCode> {
    let controller = build_controller(config, config.ui.show_progress)?;
    controller.initialize().await;

    ChatRepl::new(controller)
        .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from))
        .run()
        .await?;

    Ok(ExitCode::SUCCESS)
}

async fn run_acceptance(config: &FileConfig, file: Option<PathBuf>) -> Result<ExitCode> {
    let path = file.unwrap_or_else(|| PathBuf::from(&config.acceptance.file));

    let cases = match AcceptanceSuiteLoader::load(&path) {
        Ok(cases) => cases,
        Err(e @ SuiteLoadError::NotFound(_)) | Err(e @ SuiteLoadError::Parse { .. }) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_BAD_CASE_FILE));
        }
        Err(e) => return Err(e.into()),
    };
    if cases.is_empty() {
        eprintln!("No cases found in {}", path.display());
        return Ok(ExitCode::from(EXIT_BAD_CASE_FILE));
    }

    let timeout = Duration::from_secs(config.acceptance.timeout_seconds);
    let api = Arc::new(HttpAskClient::with_timeout(
        &config.server,
        Some(timeout),
        config.ui.locale,
    )?);
    let reporter = AcceptanceReporter::new(&config.server.base_url);

    let summary = RunAcceptanceUseCase::new(api)
        .execute_with_progress(&cases, &reporter)
        .await;

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_check(config: &FileConfig, question: &str) -> Result<ExitCode> {
    let Some(sample) = Question::try_new(question) else {
        bail!("Sample question cannot be empty");
    };

    let api = Arc::new(HttpAskClient::new(&config.server, config.ui.locale)?);
    let report = CheckApiUseCase::new(api).execute(&sample).await;

    print!("{}", ConsoleFormatter::format_check_report(&report));

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_domain::Locale;

    fn overridden(args: &[&str]) -> FileConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        let command = cli.command.clone().unwrap_or(Command::Chat);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli, &command);
        config
    }

    #[test]
    fn test_no_flags_keep_config() {
        assert_eq!(overridden(&["askdesk"]), FileConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = overridden(&[
            "askdesk",
            "ask",
            "q",
            "--base-url",
            "http://10.0.0.1:8000",
            "--locale",
            "ja",
            "--timeout",
            "5",
            "-q",
            "--no-color",
        ]);
        assert_eq!(config.server.base_url, "http://10.0.0.1:8000");
        assert_eq!(config.ui.locale, Locale::Ja);
        assert_eq!(config.server.timeout_seconds, Some(5));
        assert!(!config.ui.show_progress);
        assert!(!config.ui.color);
    }

    #[test]
    fn test_timeout_targets_acceptance_cases() {
        let config = overridden(&["askdesk", "acceptance", "--timeout", "90"]);
        assert_eq!(config.acceptance.timeout_seconds, 90);
        assert_eq!(config.server.timeout_seconds, None);
    }
}

//! # casegen
//!
//! Interactive scaffolding for TypeScript use cases and empty projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Run the interactive session.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, including an invalid menu answer |
//! |  1   | Internal / system error                   |
//! |  2   | User / input error                        |
//! |  4   | Configuration error                       |

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use casegen_adapters::{BuiltinRenderer, LocalFilesystem};
use casegen_core::application::ScaffoldService;

use crate::{
    cli::{Cli, OutputFormat},
    commands::RunContext,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    prompt::PromptSession,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and go to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: Some(e.into()),
                },
                verbose,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Run + 6. Error handling ───────────────────────────────────────
    match run(&config, &output) {
        Ok(()) => {
            info!("casegen finished");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Wire the real adapters and run one interactive session on stdin.
#[instrument(skip_all)]
fn run(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let ctx = RunContext::from_config(config)?;
    let service = ScaffoldService::new(
        Box::new(BuiltinRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // Keep stdout clean for the JSON document.
    let prompts: Box<dyn Write> = if output.format() == OutputFormat::Json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let stdin = io::stdin();
    let mut session = PromptSession::new(stdin.lock(), prompts);
    commands::interactive::execute(&mut session, &service, &ctx, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Colour only when stderr is a TTY, same as logging.rs.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

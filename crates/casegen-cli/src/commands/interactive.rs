//! The menu: ask which scaffold to generate, then dispatch.

use std::io::{BufRead, Write};

use tracing::{info, instrument, warn};

use casegen_core::{application::ScaffoldService, domain::Mode};

use crate::{
    commands::{RunContext, project, use_case},
    error::CliResult,
    output::OutputManager,
    prompt::{self, PromptSession},
};

/// Run one interactive session.
///
/// An answer other than `1` or `2` prints the invalid-choice message and
/// returns `Ok` without touching the filesystem.
#[instrument(skip_all, fields(root = %ctx.root.display()))]
pub fn execute<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    service: &ScaffoldService,
    ctx: &RunContext,
    output: &OutputManager,
) -> CliResult<()> {
    let choice = session.ask(prompt::MENU)?;

    let mode = match Mode::from_choice(&choice) {
        Ok(mode) => mode,
        Err(e) => {
            warn!(input = %choice, "Invalid menu choice");
            output.error(&e.to_string())?;
            return Ok(());
        }
    };

    info!(%mode, "Mode selected");

    match mode {
        Mode::UseCase => use_case::execute(session, service, ctx, output),
        Mode::EmptyProject => project::execute(session, service, ctx, output),
    }
}

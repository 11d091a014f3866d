//! Mode 1: scaffold a use case under `<root>/src`.

use std::io::{BufRead, Write};

use tracing::instrument;

use casegen_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::UseCaseName,
};

use crate::{
    cli::OutputFormat,
    commands::RunContext,
    error::CliResult,
    output::OutputManager,
    prompt::{self, PromptSession},
};

#[instrument(skip_all)]
pub(super) fn execute<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    service: &ScaffoldService,
    ctx: &RunContext,
    output: &OutputManager,
) -> CliResult<()> {
    let name = UseCaseName::new(session.ask(prompt::USE_CASE_NAME)?);

    let report = service.generate_use_case(&name, &ctx.root)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Scaffold for use case '{name}' has been created successfully."
    ))?;
    for line in created_lines(&report) {
        output.print(&line)?;
    }
    Ok(())
}

fn created_lines(report: &ScaffoldReport) -> Vec<String> {
    report
        .files
        .iter()
        .map(|file| format!("{} created in {}", file.kind.label(), file.path.display()))
        .collect()
}

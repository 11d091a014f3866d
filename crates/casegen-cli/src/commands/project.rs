//! Mode 2: create an empty TypeScript project in `<root>/<name>`.

use std::io::{BufRead, Write};

use tracing::instrument;

use casegen_core::{application::ScaffoldService, domain::ProjectInfo};

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
    let name = session.ask(prompt::PROJECT_NAME)?;
    let author = session.ask(prompt::PROJECT_AUTHOR)?;
    let description = session.ask(prompt::PROJECT_DESCRIPTION)?;
    let info = ProjectInfo::new(name, author, description);

    let report = service.generate_empty_project(&info, &ctx.manifest, &ctx.root)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Empty project '{}' has been created successfully.",
        info.name
    ))?;
    output.header("Project structure:")?;
    for line in tree(&info.name) {
        output.print(&line)?;
    }
    Ok(())
}

fn tree(name: &str) -> Vec<String> {
    vec![
        format!("{name}/"),
        "├── src/".into(),
        "│   └── .env.ts".into(),
        "├── package.json".into(),
        "├── tsconfig.json".into(),
        "└── README.md".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_is_rooted_at_project_name() {
        let lines = tree("billing");
        assert_eq!(lines[0], "billing/");
        assert_eq!(lines.last().map(String::as_str), Some("└── README.md"));
        assert_eq!(lines.len(), 6);
    }
}

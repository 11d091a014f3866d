//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// There are no subcommands: every run is an interactive session that asks
/// which scaffold to generate.
#[derive(Debug, Parser)]
#[command(
    name     = "casegen",
    bin_name = "casegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a scaffold for a use case or create an empty project",
    long_about = "casegen asks which scaffold to generate, then writes either a \
                  use case (controller, repository, manager, implementation, \
                  types, test stub) under ./src or an empty TypeScript project.",
    after_help = "EXAMPLES:\n\
        \x20 casegen\n\
        \x20 printf '1\\ngetUser\\n' | casegen --output-format plain\n\
        \x20 casegen --output-format json 2>/dev/null"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

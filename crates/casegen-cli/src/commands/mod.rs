//! Command handlers.
//!
//! `interactive` drives the menu and hands off to the mode-specific
//! handlers, which call the core service and print the summary.

use std::path::PathBuf;

use casegen_core::domain::ManifestSettings;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod interactive;
mod project;
mod use_case;

/// Values resolved from configuration before the first prompt.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Base directory all scaffold paths are relative to.
    pub root: PathBuf,
    pub manifest: ManifestSettings,
}

impl RunContext {
    pub fn from_config(config: &AppConfig) -> CliResult<Self> {
        let root = config
            .output_root()
            .with_cli_context(|| "failed to resolve the current directory")?;

        Ok(Self {
            root,
            manifest: config.manifest_settings(),
        })
    }
}

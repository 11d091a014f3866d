//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only ever sees the values derived
//! from it ([`ManifestSettings`], the output root).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CASEGEN_<SECTION>__<KEY>`
//! 3. Config file: `--config <FILE>` or the platform config directory
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use casegen_core::domain::ManifestSettings;

const ENV_PREFIX: &str = "CASEGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Values written into generated project manifests.
    pub project: ProjectDefaults,
    /// Where scaffolds are written.
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    pub version: String,
    pub license: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        let manifest = ManifestSettings::default();
        Self {
            version: manifest.version,
            license: manifest.license,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Base directory for generated files; the working directory when unset.
    pub root: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the config file and `CASEGEN_*` environment.
    ///
    /// `config_file` is the path the user passed via `--config` (it must
    /// exist), or `None` to use the optional default location.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, environment())
    }

    fn load_with(
        config_file: Option<&PathBuf>,
        environment: config::Environment,
    ) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => toml_file(path).required(true),
            None => toml_file(&Self::config_path()).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .context("failed to read configuration sources")?;

        let config: Self = settings
            .try_deserialize()
            .context("configuration has invalid values")?;

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.casegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "casegen", "casegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".casegen.toml"))
    }

    /// Version and license for generated `package.json` files.
    pub fn manifest_settings(&self) -> ManifestSettings {
        ManifestSettings {
            version: self.project.version.clone(),
            license: self.project.license.clone(),
        }
    }

    /// Directory scaffolds are written under.
    pub fn output_root(&self) -> std::io::Result<PathBuf> {
        match &self.scaffold.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }
}

/// `CASEGEN_<SECTION>__<KEY>` variables. Values stay strings so versions
/// like `2.0` are not reparsed as numbers.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn toml_file(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path).format(config::FileFormat::Toml)
}

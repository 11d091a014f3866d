//! Value objects for the scaffolding domain.
//!
//! Everything here is plain data entered by the user (or derived from it)
//! for the duration of one run. Nothing is validated beyond what the
//! filesystem layout needs: empty strings are legal everywhere.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

// ============================================================================
// Mode
// ============================================================================

/// What the user asked the tool to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Menu option `1`: controller, repository, manager, impl, types, test.
    UseCase,
    /// Menu option `2`: manifest, compiler config, env template, readme.
    EmptyProject,
}

impl Mode {
    /// Parse the raw answer to the menu prompt.
    ///
    /// Only the exact strings `"1"` and `"2"` are accepted. The caller strips
    /// the line terminator; surrounding whitespace is *not* forgiven.
    pub fn from_choice(choice: &str) -> Result<Self, DomainError> {
        match choice {
            "1" => Ok(Self::UseCase),
            "2" => Ok(Self::EmptyProject),
            other => Err(DomainError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UseCase => "use-case",
            Self::EmptyProject => "empty-project",
        }
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_choice(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// UseCaseName
// ============================================================================

/// Name of a use case, used verbatim and capitalized.
///
/// `fooBar` produces identifiers such as `fooBarData` (verbatim) and
/// `FooBarController` (capitalized).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UseCaseName(String);

impl UseCaseName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased.
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }
}

impl AsRef<str> for UseCaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UseCaseName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for UseCaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-case the first character and leave the rest untouched.
///
/// Uses full Unicode case mapping, so a leading `ß` becomes `SS`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

// ============================================================================
// ProjectInfo / ManifestSettings
// ============================================================================

/// Answers collected for the empty-project mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectInfo {
    pub name: String,
    pub author: String,
    pub description: String,
}

impl ProjectInfo {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            description: description.into(),
        }
    }
}

/// Package fields that are not prompted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSettings {
    pub version: String,
    pub license: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            version: "1.0.0".into(),
            license: "ISC".into(),
        }
    }
}

// ============================================================================
// ArtifactKind
// ============================================================================

/// One generated file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Controller,
    Repository,
    BaseRepository,
    Types,
    EntryPoint,
    Manager,
    Implementation,
    Test,
    Manifest,
    CompilerConfig,
    EnvTemplate,
    Readme,
}

impl ArtifactKind {
    /// Use-case artifacts in write order.
    pub const USE_CASE: [ArtifactKind; 8] = [
        Self::Controller,
        Self::Repository,
        Self::BaseRepository,
        Self::Types,
        Self::EntryPoint,
        Self::Manager,
        Self::Implementation,
        Self::Test,
    ];

    /// Empty-project artifacts in write order.
    pub const EMPTY_PROJECT: [ArtifactKind; 4] = [
        Self::Manifest,
        Self::CompilerConfig,
        Self::EnvTemplate,
        Self::Readme,
    ];

    /// Label used in the success summary (`<label> created in <path>`).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Repository => "Repository",
            Self::BaseRepository => "Base Repository",
            Self::Types => "Types",
            Self::EntryPoint => "Main index file",
            Self::Manager => "Manager file",
            Self::Implementation => "Implementation file",
            Self::Test => "Test file",
            Self::Manifest => "Package manifest",
            Self::CompilerConfig => "Compiler config",
            Self::EnvTemplate => "Environment template",
            Self::Readme => "Readme",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

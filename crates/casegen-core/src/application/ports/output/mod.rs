//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `casegen-adapters` crate provides implementations.

use crate::domain::{ManifestSettings, ProjectInfo, ProjectStructure, UseCaseName};
use crate::error::CasegenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `casegen_adapters::filesystem::LocalFilesystem` (production)
/// - `casegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CasegenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CasegenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `casegen_adapters::renderer::BuiltinRenderer` (compiled-in TypeScript templates)
///
/// Renderers return structures with paths relative to `output_root`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every use-case artifact.
    fn render_use_case(
        &self,
        name: &UseCaseName,
        output_root: &Path,
    ) -> CasegenResult<ProjectStructure>;

    /// Render the empty-project skeleton.
    fn render_empty_project(
        &self,
        info: &ProjectInfo,
        manifest: &ManifestSettings,
        output_root: &Path,
    ) -> CasegenResult<ProjectStructure>;
}

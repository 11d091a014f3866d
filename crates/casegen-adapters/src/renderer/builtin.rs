//! Renderer for the compiled-in TypeScript templates.

use std::path::Path;

use casegen_core::{
    application::ports::TemplateRenderer,
    domain::{
        ArtifactKind, DomainValidator as validator, ManifestSettings, ProjectInfo,
        ProjectLayout, ProjectStructure, RenderContext, UseCaseLayout, UseCaseName,
    },
    error::{CasegenError, CasegenResult},
};
use tracing::{debug, instrument};

use crate::builtin_templates;

/// Renders the built-in templates with plain variable substitution.
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    /// Create a new built-in renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for BuiltinRenderer {
    #[instrument(skip_all, fields(use_case = %name))]
    fn render_use_case(
        &self,
        name: &UseCaseName,
        output_root: &Path,
    ) -> CasegenResult<ProjectStructure> {
        let layout = UseCaseLayout::new(name);
        let context = RenderContext::for_use_case(name);

        let mut structure = ProjectStructure::new(output_root);
        for dir in layout.directories() {
            structure.add_directory(dir);
        }
        for kind in ArtifactKind::USE_CASE {
            let path = layout
                .artifact_path(kind)
                .ok_or_else(|| missing_path(kind))?;
            structure.add_file(path, context.render(builtin_templates::source(kind)), kind);
        }

        validator::validate_project_structure(&structure).map_err(CasegenError::Domain)?;
        debug!(entries = structure.entry_count(), "Use case rendered");

        Ok(structure)
    }

    #[instrument(skip_all, fields(project = %info.name))]
    fn render_empty_project(
        &self,
        info: &ProjectInfo,
        manifest: &ManifestSettings,
        output_root: &Path,
    ) -> CasegenResult<ProjectStructure> {
        let layout = ProjectLayout::new(info);
        let context = RenderContext::for_project(info, manifest);

        let mut structure = ProjectStructure::new(output_root);
        for dir in layout.directories() {
            structure.add_directory(dir);
        }
        for kind in ArtifactKind::EMPTY_PROJECT {
            let path = layout
                .artifact_path(kind)
                .ok_or_else(|| missing_path(kind))?;
            structure.add_file(path, context.render(builtin_templates::source(kind)), kind);
        }

        validator::validate_project_structure(&structure).map_err(CasegenError::Domain)?;
        debug!(entries = structure.entry_count(), "Empty project rendered");

        Ok(structure)
    }
}

fn missing_path(kind: ArtifactKind) -> CasegenError {
    casegen_core::application::ApplicationError::RenderingFailed {
        reason: format!("no layout path for artifact '{kind}'"),
    }
    .into()
}

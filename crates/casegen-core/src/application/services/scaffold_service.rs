//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Render the templates for the chosen mode
//! 2. Validate the rendered structure
//! 3. Write it to the filesystem
//!
//! Writes are not transactional. Directories that already exist are left
//! alone, files are always overwritten, and a failure stops the run with
//! whatever was already written still on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{
        ArtifactKind, DomainValidator as validator, FsEntry, ManifestSettings, Mode, ProjectInfo,
        ProjectStructure, UseCaseName,
    },
    error::{CasegenError, CasegenResult},
};

/// What a scaffold run did, for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub mode: Mode,
    pub root: PathBuf,
    pub created_directories: Vec<PathBuf>,
    pub existing_directories: Vec<PathBuf>,
    pub files: Vec<WrittenFile>,
}

impl ScaffoldReport {
    fn new(mode: Mode, root: &Path) -> Self {
        Self {
            mode,
            root: root.to_path_buf(),
            created_directories: Vec::new(),
            existing_directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Relative path of the written file for `kind`.
    pub fn path_of(&self, kind: ArtifactKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.path.as_path())
    }
}

/// A file written during a scaffold run, relative to the report root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use casegen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate the controller, repository, types, manager, implementation
    /// and test stub for one use case under `output_path/src`.
    #[instrument(
        skip_all,
        fields(
            use_case = %name,
            output_path = %output_path.as_ref().display()
        )
    )]
    pub fn generate_use_case(
        &self,
        name: &UseCaseName,
        output_path: impl AsRef<Path>,
    ) -> CasegenResult<ScaffoldReport> {
        info!("Generating use case scaffold");

        let structure = self.renderer.render_use_case(name, output_path.as_ref())?;
        self.write_structure(Mode::UseCase, &structure)
    }

    /// Generate an empty project skeleton at `output_path/<project name>`.
    #[instrument(
        skip_all,
        fields(
            project = %info.name,
            output_path = %output_path.as_ref().display()
        )
    )]
    pub fn generate_empty_project(
        &self,
        info: &ProjectInfo,
        manifest: &ManifestSettings,
        output_path: impl AsRef<Path>,
    ) -> CasegenResult<ScaffoldReport> {
        info!("Generating empty project");

        let structure = self
            .renderer
            .render_empty_project(info, manifest, output_path.as_ref())?;
        self.write_structure(Mode::EmptyProject, &structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(
        &self,
        mode: Mode,
        structure: &ProjectStructure,
    ) -> CasegenResult<ScaffoldReport> {
        validator::validate_project_structure(structure).map_err(CasegenError::Domain)?;

        debug!(entries = structure.entry_count(), "Structure validated");

        match self.write_all(mode, structure) {
            Ok(report) => {
                info!(
                    files = report.files.len(),
                    created_directories = report.created_directories.len(),
                    "Scaffold completed successfully"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "Write failed; files already written are left in place");
                Err(e)
            }
        }
    }

    /// Write all entries in order: directories are skipped when present,
    /// files are always overwritten.
    fn write_all(&self, mode: Mode, structure: &ProjectStructure) -> CasegenResult<ScaffoldReport> {
        let root = structure.root();
        let mut report = ScaffoldReport::new(mode, root);

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    if self.filesystem.exists(&path) {
                        debug!(path = %path.display(), "Directory exists, skipping");
                        report.existing_directories.push(dir.path.clone());
                    } else {
                        self.filesystem.create_dir_all(&path)?;
                        report.created_directories.push(dir.path.clone());
                    }
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        if !self.filesystem.exists(parent) {
                            self.filesystem.create_dir_all(parent)?;
                        }
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), kind = %file.kind, "File written");

                    report.files.push(WrittenFile {
                        kind: file.kind,
                        path: file.path.clone(),
                        bytes: file.size(),
                    });
                }
            }
        }

        Ok(report)
    }
}

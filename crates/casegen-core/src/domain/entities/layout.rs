//! Conventional directory layouts.
//!
//! Layouts only compute relative paths; the output root is supplied when a
//! [`ProjectStructure`](super::ProjectStructure) is built.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{ArtifactKind, ProjectInfo, UseCaseName};

const SRC_DIR: &str = "src";
const CASES_DIR: &str = "cases";
const CONTROLLERS_DIR: &str = "controllers";
const REPOSITORIES_DIR: &str = "repositories";
const SHARED_DIR: &str = "shared";

/// Paths produced for one use case.
///
/// ```text
/// src/
/// ├── cases/<name>/{impl,manager,types,__tests__}/
/// ├── controllers/<name>Controller.ts
/// ├── repositories/<name>Repository.ts
/// └── shared/repository.ts
/// ```
#[derive(Debug, Clone)]
pub struct UseCaseLayout {
    name: String,
    case_dir: PathBuf,
}

impl UseCaseLayout {
    pub fn new(name: &UseCaseName) -> Self {
        Self {
            name: name.as_str().to_string(),
            case_dir: join_under(&Path::new(SRC_DIR).join(CASES_DIR), name.as_str()),
        }
    }

    /// `src/cases/<name>`
    pub fn case_dir(&self) -> &Path {
        &self.case_dir
    }

    /// Directories in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let src = Path::new(SRC_DIR);
        vec![
            self.case_dir.clone(),
            self.case_dir.join("impl"),
            self.case_dir.join("manager"),
            self.case_dir.join("types"),
            self.case_dir.join("__tests__"),
            src.join(CONTROLLERS_DIR),
            src.join(REPOSITORIES_DIR),
            src.join(SHARED_DIR),
        ]
    }

    /// Relative path of a use-case artifact, `None` for project artifacts.
    pub fn artifact_path(&self, kind: ArtifactKind) -> Option<PathBuf> {
        let src = Path::new(SRC_DIR);
        let path = match kind {
            ArtifactKind::Controller => join_under(
                &src.join(CONTROLLERS_DIR),
                &format!("{}Controller.ts", self.name),
            ),
            ArtifactKind::Repository => join_under(
                &src.join(REPOSITORIES_DIR),
                &format!("{}Repository.ts", self.name),
            ),
            ArtifactKind::BaseRepository => src.join(SHARED_DIR).join("repository.ts"),
            ArtifactKind::Types => self.case_dir.join("types").join("index.ts"),
            ArtifactKind::EntryPoint => self.case_dir.join("index.ts"),
            ArtifactKind::Manager => self.case_dir.join("manager").join("index.ts"),
            ArtifactKind::Implementation => self.case_dir.join("impl").join("index.ts"),
            ArtifactKind::Test => self.case_dir.join("__tests__").join("index.test.ts"),
            _ => return None,
        };
        Some(path)
    }
}

/// Paths produced for an empty project, rooted at `<project>/`.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    project_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(info: &ProjectInfo) -> Self {
        Self {
            project_dir: join_under(Path::new(""), &info.name),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn directories(&self) -> Vec<PathBuf> {
        vec![self.project_dir.clone(), self.project_dir.join(SRC_DIR)]
    }

    pub fn artifact_path(&self, kind: ArtifactKind) -> Option<PathBuf> {
        let path = match kind {
            ArtifactKind::Manifest => self.project_dir.join("package.json"),
            ArtifactKind::CompilerConfig => self.project_dir.join("tsconfig.json"),
            ArtifactKind::EnvTemplate => self.project_dir.join(SRC_DIR).join(".env.ts"),
            ArtifactKind::Readme => self.project_dir.join("README.md"),
            _ => return None,
        };
        Some(path)
    }
}

/// Append a user-supplied segment to `base`.
///
/// Root and drive-prefix components are dropped first, so `/foo` lands at
/// `base/foo` instead of replacing `base`.
fn join_under(base: &Path, segment: &str) -> PathBuf {
    let relative: PathBuf = Path::new(segment)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    base.join(relative)
}

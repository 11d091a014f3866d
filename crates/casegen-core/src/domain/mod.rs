//! Core domain layer for casegen.
//!
//! This module contains pure logic with no I/O. Writing files and reading
//! prompts are handled via ports defined in the application layer.
//!
//! - **No I/O**: No filesystem, console, or environment access
//! - **Deterministic**: The same names always render the same structure
//! - **Plain data**: Entities are `Clone` and carry no behaviour beyond
//!   validation and path computation

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    layout::{ProjectLayout, UseCaseLayout},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ArtifactKind, ManifestSettings, Mode, ProjectInfo, UseCaseName, capitalize,
};

pub use validation::DomainValidator;

//! Infrastructure adapters for casegen.
//!
//! This crate implements the ports defined in `casegen-core::application::ports`.
//! It contains the compiled-in templates and all filesystem I/O.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::BuiltinRenderer;

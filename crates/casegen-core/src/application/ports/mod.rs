//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside
//! world. Adapters in `casegen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateRenderer`: Template rendering
//!
//! - **Driving (Input) Ports**: the interactive CLI session calls
//!   `ScaffoldService` directly

pub mod output;

pub use output::{Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};

//! Application layer for casegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldReport, ScaffoldService, WrittenFile};

pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;

//! casegen Core - Ports and Adapters Implementation
//!
//! This crate provides the domain and application layers for the casegen
//! use-case scaffolding tool.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           casegen-cli (CLI)             │
//! │   prompts, config, output, exit codes   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    casegen-adapters (Infrastructure)    │
//! │ (BuiltinRenderer, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (UseCaseName, Layouts, RenderContext,  │
//! │           ProjectStructure)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use casegen_core::prelude::*;
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! let report = service.generate_use_case(&UseCaseName::new("getUser"), ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService, WrittenFile,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ManifestSettings, Mode, ProjectInfo, ProjectStructure, RenderContext,
        UseCaseName,
    };
    pub use crate::error::{CasegenError, CasegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

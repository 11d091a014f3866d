pub mod layout;
pub mod project_structure;
pub mod render_context;

pub use crate::domain::DomainError;
pub use layout::{ProjectLayout, UseCaseLayout};
pub use project_structure::ProjectStructure;
pub use render_context::RenderContext;

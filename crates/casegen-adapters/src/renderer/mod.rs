//! Template renderers.

mod builtin;

pub use builtin::BuiltinRenderer;

//! Field substitution for placeholder files.
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `fields`: the `{{.Field}}` substitution engine

pub mod fields;
pub mod interface;

pub use fields::FieldRenderer;
pub use interface::TemplateRenderer;

use thiserror::Error;

/// Failure while substituting fields into a template.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("undefined field '{field}' referenced at line {line}")]
    UndefinedField { field: String, line: usize },

    #[error("field '{field}' referenced at line {line} is not a string")]
    NonStringField { field: String, line: usize },
}

/// Returns the renderer used for placeholder files.
pub fn get_renderer() -> FieldRenderer {
    FieldRenderer::new()
}

use super::RenderError;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering, a JSON object
    ///
    /// # Returns
    /// * `Result<String, RenderError>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, RenderError>;
}

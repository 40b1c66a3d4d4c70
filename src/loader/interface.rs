use crate::{error::Result, loader::Template};

/// Trait for looking up templates in one search location.
pub trait TemplateLoader {
    /// Finds the template registered under `name`.
    ///
    /// # Returns
    /// * `Result<Option<Template>>` - The template, or `None` when this location has no such name
    fn find(&self, name: &str) -> Result<Option<Template>>;

    /// Lists every template this location provides.
    fn list(&self) -> Result<Vec<Template>>;
}

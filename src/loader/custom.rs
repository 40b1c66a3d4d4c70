use crate::config::CustomTemplate;
use crate::error::Result;
use crate::loader::{interface::TemplateLoader, Template, TemplateSource};

/// Loader for templates declared in the configuration file.
///
/// Entries are matched by name in declaration order. Their paths are not
/// checked here: a missing directory surfaces when the tree is copied.
pub struct CustomLoader<'a> {
    entries: &'a [CustomTemplate],
}

impl<'a> CustomLoader<'a> {
    /// Creates a new CustomLoader instance.
    pub fn new(entries: &'a [CustomTemplate]) -> Self {
        Self { entries }
    }

    fn to_template(entry: &CustomTemplate) -> Template {
        Template::new(&entry.name, &entry.path, TemplateSource::Custom)
    }
}

impl TemplateLoader for CustomLoader<'_> {
    fn find(&self, name: &str) -> Result<Option<Template>> {
        Ok(self.entries.iter().find(|entry| entry.name == name).map(Self::to_template))
    }

    fn list(&self) -> Result<Vec<Template>> {
        Ok(self.entries.iter().map(Self::to_template).collect())
    }
}

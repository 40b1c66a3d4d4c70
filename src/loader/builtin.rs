use crate::error::Result;
use crate::ext::PathExt;
use crate::loader::{interface::TemplateLoader, Template, TemplateSource};
use log::debug;
use std::path::{Component, Path};

/// Loader for templates stored one level below the built-in templates root.
pub struct BuiltinLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> BuiltinLoader<P> {
    /// Creates a new BuiltinLoader instance.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    /// A name maps to a directory only when it is a single plain path component.
    fn is_single_component(name: &str) -> bool {
        let mut components = Path::new(name).components();
        matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
    }
}

impl<P: AsRef<Path>> TemplateLoader for BuiltinLoader<P> {
    fn find(&self, name: &str) -> Result<Option<Template>> {
        if !Self::is_single_component(name) {
            debug!("'{name}' cannot name a built-in template directory");
            return Ok(None);
        }

        let path = self.root.as_ref().join(name);
        if path.is_dir() {
            Ok(Some(Template::new(name, path, TemplateSource::BuiltIn)))
        } else {
            Ok(None)
        }
    }

    fn list(&self) -> Result<Vec<Template>> {
        let root = self.root.as_ref();
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Templates directory '{}' does not exist", root.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut templates = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let name = path.file_name_checked()?.to_string();
            if name.starts_with('.') {
                continue;
            }
            templates.push(Template::new(name, path, TemplateSource::BuiltIn));
        }
        templates.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(templates)
    }
}

use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader::{builtin::BuiltinLoader, custom::CustomLoader};
use log::debug;
use std::path::{Path, PathBuf};

pub mod builtin;
pub mod custom;
pub mod interface;

pub use interface::TemplateLoader;

/// Where a template was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// Declared in the configuration file
    Custom,
    /// A directory under the built-in templates root
    BuiltIn,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Custom => write!(f, "custom"),
            TemplateSource::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// A resolved template: a name bound to a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    path: PathBuf,
    source: TemplateSource,
}

impl Template {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        path: P,
        source: TemplateSource,
    ) -> Self {
        Self { name: name.into(), path: path.into(), source }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> TemplateSource {
        self.source
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}: '{}')", self.name, self.source, self.path.display())
    }
}

/// Resolves a template name against the configuration.
///
/// Custom templates are searched first, in declaration order, and always
/// shadow a built-in template of the same name.
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `name` - Template name requested by the user
///
/// # Returns
/// * `Result<Template>` - The resolved template or `Error::TemplateNotFound`
pub fn resolve(config: &Config, name: &str) -> Result<Template> {
    let loaders: [&dyn TemplateLoader; 2] = [
        &CustomLoader::new(&config.custom_templates),
        &BuiltinLoader::new(&config.templates_path),
    ];

    for loader in loaders {
        if let Some(template) = loader.find(name)? {
            debug!("Resolved template {template}");
            return Ok(template);
        }
    }

    Err(Error::TemplateNotFound {
        name: name.to_string(),
        custom_templates: config
            .custom_templates
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        templates_path: config.templates_path.display().to_string(),
    })
}

/// Lists every template reachable by name: custom templates in declaration
/// order, then built-in templates that no custom entry shadows.
pub fn list_templates(config: &Config) -> Result<Vec<Template>> {
    let mut templates = CustomLoader::new(&config.custom_templates).list()?;
    let builtin = BuiltinLoader::new(&config.templates_path).list()?;

    for template in builtin {
        if templates.iter().all(|t| t.name() != template.name()) {
            templates.push(template);
        }
    }

    Ok(templates)
}

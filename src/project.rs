use serde::Serialize;

use crate::constants::{GO_VERSION, PLACEHOLDER_MARKER};
use crate::error::{Error, Result};
use crate::loader::Template;

/// The unit of generation: the values substituted into placeholder files
/// and the template they come from.
///
/// Serializes to the render context `{GitPrefix, Name, ModuleName}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    git_prefix: String,
    name: String,
    module_name: String,
    #[serde(skip)]
    template: Template,
}

impl Project {
    pub fn new<S: Into<String>>(git_prefix: S, name: S, template: Template) -> Result<Self> {
        let git_prefix = git_prefix.into();
        let name = name.into();
        validate_name(&name)?;
        let module_name = module_name(&git_prefix, &name);
        Ok(Self { git_prefix, name, module_name, template })
    }

    pub fn git_prefix(&self) -> &str {
        &self.git_prefix
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Context handed to the field renderer.
    pub fn context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::Other(e.into()))
    }
}

/// Derives the fully-qualified module name of a project.
///
/// # Examples
/// ```
/// use goproject::project::module_name;
///
/// assert_eq!(module_name("", "proj"), "proj");
/// assert_eq!(module_name("github.com/x", "proj"), "github.com/x/proj");
/// assert_eq!(module_name("github.com/x/", "proj"), "github.com/x/proj");
/// ```
pub fn module_name(git_prefix: &str, name: &str) -> String {
    let git_prefix = git_prefix.trim_end_matches('/');
    if git_prefix.is_empty() {
        name.to_string()
    } else {
        format!("{git_prefix}/{name}")
    }
}

/// Content of a `go.mod` declaring `module`.
pub fn go_mod(module: &str) -> String {
    format!("module {module}\n\ngo {GO_VERSION}\n")
}

/// A project name becomes a single directory under the working directory.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name == "." || name == ".." {
        "name must not be a relative directory reference"
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        "name must not contain a path separator"
    } else if name.to_lowercase().contains(PLACEHOLDER_MARKER) {
        "name must not contain the placeholder marker"
    } else {
        return Ok(());
    };

    Err(Error::InvalidProjectName { name: name.to_string(), reason: reason.to_string() })
}

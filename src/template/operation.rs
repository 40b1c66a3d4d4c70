use std::path::PathBuf;

/// What the transformer does with one file of the project tree.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateOperation {
    Rename { source: PathBuf, target: PathBuf },
    Render { source: PathBuf, target: PathBuf },
    Keep { source: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Rename { source, target } => {
                format!("Renaming '{}' to '{}'", source.display(), target.display())
            }
            TemplateOperation::Render { source, target } => {
                format!("Rendering '{}' into '{}'", source.display(), target.display())
            }
            TemplateOperation::Keep { source } => {
                format!("Skipping '{}'", source.display())
            }
        }
    }
}

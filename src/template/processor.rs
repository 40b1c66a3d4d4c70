use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::PLACEHOLDER_MARKER;
use crate::error::{Error, Result, TransformCause};
use crate::ioutils::write_file_atomic;
use crate::project::Project;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;
use super::rules::{evaluate, Action, NameSwap, Rule};

pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    rules: &'a [Rule],

    /// Other
    swap: NameSwap,
    context: serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        rules: &'a [Rule],
        project: &Project,
    ) -> Result<Self> {
        let swap = NameSwap::new(project.template().name(), project.name())
            .map_err(|e| Error::Other(e.into()))?;
        let context = project.context()?;
        Ok(Self { engine, rules, swap, context })
    }

    /// Decides what to do with one file without touching the filesystem.
    ///
    /// Names that are not valid Unicode match no rule and are kept as is.
    /// A rendered file whose output name still carries the placeholder
    /// marker is an error.
    ///
    /// # Arguments
    /// * `entry` - Path of a file inside the project tree
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The operation to perform
    pub fn plan<P: AsRef<Path>>(&self, entry: P) -> Result<TemplateOperation> {
        let source = entry.as_ref().to_path_buf();
        let Some(file_name) = source.file_name().and_then(|name| name.to_str()) else {
            debug!("'{}' has no Unicode file name, keeping it", source.display());
            return Ok(TemplateOperation::Keep { source });
        };

        Ok(match evaluate(self.rules, file_name, &self.swap) {
            Some(Action::Rename { to }) => {
                TemplateOperation::Rename { target: source.with_file_name(to), source }
            }
            Some(Action::Render { to }) if to.contains(PLACEHOLDER_MARKER) => {
                return Err(Error::transform(source, TransformCause::MarkerRemains(to)));
            }
            Some(Action::Render { to }) => {
                TemplateOperation::Render { target: source.with_file_name(to), source }
            }
            None => TemplateOperation::Keep { source },
        })
    }

    /// Applies the rules to every file under `root`.
    ///
    /// The tree is listed before anything is changed, so files produced here
    /// are never visited. Processing stops at the first error. Sources of
    /// files rendered so far are deleted in every case; when the walk
    /// succeeded, a failed deletion is reported as the error.
    pub fn process_all_files<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let entries = Self::snapshot(root.as_ref())?;

        let mut rendered_sources = Vec::new();
        let result = self.apply(&entries, &mut rendered_sources);
        let cleanup = Self::remove_rendered_sources(&rendered_sources);

        match (result, cleanup) {
            (Err(e), Err(cleanup_err)) => {
                warn!("{cleanup_err}");
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
            (Ok(()), cleanup) => cleanup,
        }
    }

    fn snapshot(root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                Error::transform(path, e)
            })?;
            if !entry.file_type().is_dir() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn apply(&self, entries: &[PathBuf], rendered_sources: &mut Vec<PathBuf>) -> Result<()> {
        for entry in entries {
            debug!("Processing file {}", entry.display());
            let operation = self.plan(entry)?;
            self.handle_operation(&operation)?;

            match operation {
                TemplateOperation::Keep { .. } => debug!("{}", operation.get_message()),
                TemplateOperation::Render { source, .. } => {
                    info!("Rendered '{}'", source.display());
                    rendered_sources.push(source);
                }
                TemplateOperation::Rename { .. } => info!("{}", operation.get_message()),
            }
        }
        Ok(())
    }

    fn handle_operation(&self, operation: &TemplateOperation) -> Result<()> {
        match operation {
            TemplateOperation::Rename { source, target } => {
                fs::rename(source, target).map_err(|e| Error::transform(source, e))
            }
            TemplateOperation::Render { source, target } => {
                let template = fs::read_to_string(source)
                    .map_err(|e| Error::transform(source, e))?;
                let permissions = fs::metadata(source)
                    .map_err(|e| Error::transform(source, e))?
                    .permissions();
                let content = self
                    .engine
                    .render(&template, &self.context)
                    .map_err(|e| Error::transform(source, e))?;
                write_file_atomic(content.as_bytes(), target, Some(permissions))
                    .map_err(|e| Error::transform(target, e))
            }
            TemplateOperation::Keep { .. } => Ok(()),
        }
    }

    /// Removes every source, returning the first failure.
    fn remove_rendered_sources(sources: &[PathBuf]) -> Result<()> {
        let mut first_error = None;
        for source in sources {
            debug!("Removing placeholder file {}", source.display());
            if let Err(e) = fs::remove_file(source) {
                first_error.get_or_insert(Error::transform(source, e));
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

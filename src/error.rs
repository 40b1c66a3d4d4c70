use std::path::PathBuf;
use thiserror::Error;

use crate::renderer::RenderError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error(
        "Cannot proceed: template '{name}' was not found. Searched custom templates [{custom_templates}] and '{templates_path}'."
    )]
    TemplateNotFound { name: String, custom_templates: String, templates_path: String },

    #[error("Cannot proceed: destination directory '{destination}' already exists.")]
    DestinationExists { destination: String },

    #[error("Failed to copy template entry '{path}'. Original error: {source}")]
    MaterializeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to transform '{path}'. Original error: {cause}")]
    TransformError {
        path: PathBuf,
        #[source]
        cause: TransformCause,
    },

    #[error("Failed to rename '{from}' to '{to}': {reason}")]
    PathFixupFailed { from: PathBuf, to: PathBuf, reason: String },

    #[error("Failed to initialize repository in '{path}': {reason}")]
    VcsInitFailed { path: PathBuf, reason: String },

    #[error("Failed to stage files in '{path}': {reason}")]
    VcsStageFailed { path: PathBuf, reason: String },

    #[error("Failed to create the initial commit in '{path}': {reason}")]
    VcsCommitFailed { path: PathBuf, reason: String },

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    #[error("Failed to parse config file '{path}': {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error(
        "Configuration directory '{config_dir}' already exists. Remove it to start over from scratch."
    )]
    ConfigDirExists { config_dir: String },

    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Underlying reason of a [`Error::TransformError`].
#[derive(Error, Debug)]
pub enum TransformCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("output name '{0}' still contains the placeholder marker")]
    MarkerRemains(String),
}

impl Error {
    pub fn transform<C: Into<TransformCause>>(path: impl Into<PathBuf>, cause: C) -> Self {
        Error::TransformError { path: path.into(), cause: cause.into() }
    }

    pub fn materialize(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::MaterializeFailed { path: path.into(), source }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Configuration loading and first-run setup.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Renames the template's command folder after the project.
pub mod fixup;

/// The end-to-end generation pipeline.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Resolution of template names to template directories.
pub mod loader;

/// Copies a template into a new project directory.
pub mod materializer;

/// The project being generated and its render context.
pub mod project;

/// Field substitution in placeholder files.
pub mod renderer;

/// Single-file project generator.
pub mod simple;

/// Placeholder file transformation.
pub mod template;

/// Repository bootstrap of generated projects.
pub mod vcs;

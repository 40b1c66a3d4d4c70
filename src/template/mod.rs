//! Placeholder transformation of a materialized project tree
//!
//! This module contains the transformer components:
//! - `rules`: Ordered rename rules evaluated per file
//! - `operation`: Operations derived from the rules
//! - `processor`: Walks the tree and applies the operations

pub mod operation;
pub mod processor;
pub mod rules;

use std::path::Path;

use crate::error::Result;
use crate::project::Project;
use crate::renderer::get_renderer;

/// Renames reserved files and renders placeholder files under `root`.
pub fn transform<P: AsRef<Path>>(project: &Project, root: P) -> Result<()> {
    let engine = get_renderer();
    let processor = processor::TemplateProcessor::new(&engine, rules::RULES, project)?;
    processor.process_all_files(root)
}

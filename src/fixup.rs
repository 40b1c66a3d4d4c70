//! Renames the template's command folder after the project.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CMD_DIR;
use crate::error::{Error, Result};
use crate::project::Project;

/// Returns `(cmd/<template>, cmd/<project>)` under `root`, both lower-cased.
pub fn nested_folder_paths<P: AsRef<Path>>(project: &Project, root: P) -> (PathBuf, PathBuf) {
    let cmd = root.as_ref().join(CMD_DIR);
    let old = cmd.join(project.template().name().to_lowercase());
    let new = cmd.join(project.name().to_lowercase());
    (old, new)
}

/// Renames `cmd/<template name>` to `cmd/<project name>`.
///
/// A project without a `cmd` directory does not follow the convention and
/// is left alone. Once `cmd` exists, the template's folder must exist too
/// and the project's folder must not.
pub fn fix_nested_folder<P: AsRef<Path>>(project: &Project, root: P) -> Result<()> {
    let root = root.as_ref();
    let (old, new) = nested_folder_paths(project, root);

    if !root.join(CMD_DIR).is_dir() {
        debug!("No '{CMD_DIR}' directory in '{}', skipping folder rename", root.display());
        return Ok(());
    }

    let failed = |reason: String| Error::PathFixupFailed {
        from: old.clone(),
        to: new.clone(),
        reason,
    };

    if !old.is_dir() {
        return Err(failed("source directory does not exist".to_string()));
    }
    if old == new {
        debug!("'{}' already matches the project name", old.display());
        return Ok(());
    }
    if fs::symlink_metadata(&new).is_ok() {
        return Err(failed("target already exists".to_string()));
    }

    debug!("Renaming '{}' to '{}'", old.display(), new.display());
    fs::rename(&old, &new).map_err(|e| failed(e.to_string()))
}

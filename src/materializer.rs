//! Copies a template tree into a fresh project directory.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::constants::VCS_METADATA_DIR;
use crate::error::{Error, Result};
use crate::ioutils::{copy_file_atomic, create_private_dir, ensure_absent};

fn is_vcs_metadata(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == VCS_METADATA_DIR
}

/// Copies every entry under `template_root` into `destination`.
///
/// `destination` must not exist; it is created with owner-only permissions.
/// Files keep their permissions and are written atomically. Symlinks are
/// followed: a linked file becomes a regular file holding its target's
/// content and a linked directory is copied as a directory. A `.git`
/// directory inside the template is skipped.
///
/// On failure the partially populated destination is left in place.
pub fn materialize<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    destination: Q,
) -> Result<()> {
    let template_root = template_root.as_ref();
    let destination = destination.as_ref();

    ensure_absent(destination)?;

    let metadata =
        fs::metadata(template_root).map_err(|e| Error::materialize(template_root, e))?;
    if !metadata.is_dir() {
        return Err(Error::materialize(
            template_root,
            io::Error::other("template root is not a directory"),
        ));
    }

    info!("Copying '{}' to '{}'", template_root.display(), destination.display());
    create_private_dir(destination).map_err(|e| Error::materialize(destination, e))?;

    let walker = WalkDir::new(template_root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_vcs_metadata(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_root).to_path_buf();
            Error::materialize(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::materialize(entry.path(), io::Error::other(e)))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            debug!("Creating directory '{}'", target.display());
            fs::create_dir(&target).map_err(|e| Error::materialize(entry.path(), e))?;
        } else {
            debug!("Copying '{}' to '{}'", entry.path().display(), target.display());
            copy_file_atomic(entry.path(), target.as_path())
                .map_err(|e| Error::materialize(entry.path(), e))?;
        }
    }

    Ok(())
}

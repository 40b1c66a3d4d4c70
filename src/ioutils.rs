use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Ensures the destination directory does not exist yet.
pub fn ensure_absent<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    // symlink_metadata so that a dangling link also counts as existing
    if fs::symlink_metadata(destination).is_ok() {
        return Err(Error::DestinationExists {
            destination: destination.display().to_string(),
        });
    }
    Ok(())
}

/// Creates a single directory readable only by its owner.
pub fn create_private_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path.as_ref())
}

/// Writes `content` next to `dest_path` in a temporary file, then renames it
/// over `dest_path`, so readers never observe a half-written file.
pub fn write_file_atomic<P: AsRef<Path>>(
    content: &[u8],
    dest_path: P,
    permissions: Option<Permissions>,
) -> std::io::Result<()> {
    let dest_path = dest_path.as_ref();
    let parent = match dest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions)?;
    }
    tmp.persist(dest_path).map_err(|e| e.error)?;
    Ok(())
}

/// Copies a file through [`write_file_atomic`], keeping the source permissions.
///
/// Symlinks are followed: the destination receives the target's content.
pub fn copy_file_atomic<P: AsRef<Path>>(source_path: P, dest_path: P) -> std::io::Result<()> {
    let source_path = source_path.as_ref();
    let content = fs::read(source_path)?;
    let permissions = fs::metadata(source_path)?.permissions();
    write_file_atomic(&content, dest_path, Some(permissions))
}

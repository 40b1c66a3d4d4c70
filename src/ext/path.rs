use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversions
pub trait PathExt {
    /// Returns the final component of the path as a string slice.
    ///
    /// Fails when the path has no file name (`/`, `..`) or when the name is
    /// not valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use goproject::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("cmd/demo/main-tpl.go");
    /// assert_eq!(path.file_name_checked().unwrap(), "main-tpl.go");
    /// ```
    fn file_name_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn file_name_checked(&self) -> Result<&str> {
        let name = self.file_name().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Path '{}' has no file name", self.display()))
        })?;
        name.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "File name of '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }
}

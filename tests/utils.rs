#![allow(dead_code)]

use goproject::config::Config;
use goproject::error::Result;
use goproject::generator::{GenerateRequest, Generator};
use goproject::vcs::Vcs;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Backend that records nothing, for comparing generated trees without `.git`.
pub struct NoVcs;

impl Vcs for NoVcs {
    fn init(&self, _: &Path) -> Result<()> {
        Ok(())
    }

    fn stage_all(&self, _: &Path) -> Result<()> {
        Ok(())
    }

    fn commit(&self, _: &Path, _: &str) -> Result<()> {
        Ok(())
    }
}

/// Writes `files` (relative path, content) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// A configuration directory with built-in templates under `templates/`.
pub struct Fixture {
    pub home: TempDir,
    pub work: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { home: TempDir::new().unwrap(), work: TempDir::new().unwrap() }
    }

    pub fn templates_path(&self) -> PathBuf {
        self.home.path().join("templates")
    }

    /// Adds a built-in template.
    pub fn builtin(&self, name: &str, files: &[(&str, &str)]) -> &Self {
        let root = self.templates_path().join(name);
        fs::create_dir_all(&root).unwrap();
        write_tree(&root, files);
        self
    }

    /// Creates a template outside the templates root and returns its path.
    pub fn external(&self, dir: &str, files: &[(&str, &str)]) -> PathBuf {
        let root = self.home.path().join("custom").join(dir);
        fs::create_dir_all(&root).unwrap();
        write_tree(&root, files);
        root
    }

    pub fn config(&self) -> Config {
        Config::new(self.templates_path())
    }

    pub fn generate(
        &self,
        config: &Config,
        vcs: &dyn Vcs,
        git_prefix: &str,
        template: &str,
        project: &str,
    ) -> Result<PathBuf> {
        let request = GenerateRequest::new(git_prefix, template, project);
        Generator::new(config, vcs).generate(&request, self.work.path())
    }
}

/// Relative paths of every file under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_string_lossy().into_owned())
        .collect()
}

/// Prints the files only present in one directory and the files whose
/// content differs.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = list_files(actual);
    let expected_files = list_files(expected);

    println!("\n=== Directory Comparison ===");
    for file in actual_files.iter().filter(|f| !expected_files.contains(f)) {
        println!("  + {file}");
    }
    for file in expected_files.iter().filter(|f| !actual_files.contains(f)) {
        println!("  - {file}");
    }
    for file in actual_files.iter().filter(|f| expected_files.contains(f)) {
        let left = fs::read(actual.join(file)).unwrap();
        let right = fs::read(expected.join(file)).unwrap();
        if left != right {
            println!("  ~ {file}");
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&left));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&right));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` holds exactly the `expected` files.
pub fn assert_tree(actual: &Path, expected: &[(&str, &str)]) {
    let expected_dir = TempDir::new().unwrap();
    write_tree(expected_dir.path(), expected);

    if dir_diff::is_different(actual, expected_dir.path()).unwrap() {
        print_dir_diff(actual, expected_dir.path());
        panic!("Directories differ. See above for details.");
    }
}

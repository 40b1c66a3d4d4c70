//! Template-free generator: a module file and a hello-world `main.go`.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::GO_MOD_FILE;
use crate::error::Result;
use crate::ioutils::ensure_absent;
use crate::project::{go_mod, module_name, validate_name};
use crate::vcs::{bootstrap, Vcs};

const MAIN_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello, world!")
}
"#;

/// Creates `<parent_dir>/<project_name>` holding `go.mod` and `main.go`,
/// then bootstraps a repository in it.
pub fn generate_simple<P: AsRef<Path>>(
    vcs: &dyn Vcs,
    git_prefix: &str,
    project_name: &str,
    parent_dir: P,
) -> Result<PathBuf> {
    validate_name(project_name)?;
    let root = parent_dir.as_ref().join(project_name);
    ensure_absent(&root)?;

    info!("Creating simple project '{}'", root.display());
    fs::create_dir(&root)?;
    let module = module_name(git_prefix, project_name);
    fs::write(root.join(GO_MOD_FILE), go_mod(&module))?;
    fs::write(root.join("main.go"), MAIN_GO)?;

    bootstrap(vcs, &root)?;
    Ok(root)
}

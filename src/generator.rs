//! The generation pipeline: resolve, materialize, transform, fix up and
//! bootstrap a repository, strictly in that order.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::GO_MOD_FILE;
use crate::error::Result;
use crate::fixup::fix_nested_folder;
use crate::ioutils::ensure_absent;
use crate::loader::resolve;
use crate::materializer::materialize;
use crate::project::{go_mod, Project};
use crate::template::transform;
use crate::vcs::{bootstrap, Vcs};

/// One `new` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub git_prefix: String,
    pub template_name: String,
    pub project_name: String,
}

impl GenerateRequest {
    pub fn new<S: Into<String>>(git_prefix: S, template_name: S, project_name: S) -> Self {
        Self {
            git_prefix: git_prefix.into(),
            template_name: template_name.into(),
            project_name: project_name.into(),
        }
    }
}

pub struct Generator<'a> {
    config: &'a Config,
    vcs: &'a dyn Vcs,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, vcs: &'a dyn Vcs) -> Self {
        Self { config, vcs }
    }

    /// Generates the project `request.project_name` under `parent_dir`.
    ///
    /// Nothing is written when the template cannot be resolved, the name is
    /// invalid or the destination already exists. A later failure leaves the
    /// partially generated directory in place.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Root of the generated project
    pub fn generate<P: AsRef<Path>>(
        &self,
        request: &GenerateRequest,
        parent_dir: P,
    ) -> Result<PathBuf> {
        let template = resolve(self.config, &request.template_name)?;
        let project = Project::new(
            request.git_prefix.as_str(),
            request.project_name.as_str(),
            template,
        )?;

        let root = parent_dir.as_ref().join(project.name());
        ensure_absent(&root)?;

        info!("Generating '{}' from {}", project.module_name(), project.template());
        materialize(project.template().path(), &root)?;
        transform(&project, &root)?;
        fix_nested_folder(&project, &root)?;
        ensure_module_file(&project, &root)?;
        bootstrap(self.vcs, &root)?;

        info!("Project '{}' ready in '{}'", project.name(), root.display());
        Ok(root)
    }
}

/// Writes a `go.mod` for the project unless the template provided one.
fn ensure_module_file(project: &Project, root: &Path) -> Result<()> {
    let path = root.join(GO_MOD_FILE);
    if fs::symlink_metadata(&path).is_ok() {
        debug!("Template provided '{}'", path.display());
        return Ok(());
    }
    info!("Writing module file for '{}'", project.module_name());
    fs::write(&path, go_mod(project.module_name()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CountingVcs {
        calls: Cell<usize>,
    }

    impl Vcs for CountingVcs {
        fn init(&self, _: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }

        fn stage_all(&self, _: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }

        fn commit(&self, _: &Path, _: &str) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn config_with_cli_template(home: &Path) -> Config {
        let templates = home.join("templates");
        fs::create_dir_all(templates.join("cli/cmd/cli")).unwrap();
        fs::write(
            templates.join("cli/cmd/cli/main-tpl.go"),
            "package main\n\n// {{ .Name }}\n",
        )
        .unwrap();
        fs::write(templates.join("cli/go.mod-tpl"), "module {{.ModuleName}}\n").unwrap();
        Config::new(templates)
    }

    #[test]
    fn runs_the_whole_pipeline() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = config_with_cli_template(home.path());
        let vcs = CountingVcs::default();

        let request = GenerateRequest::new("github.com/x", "cli", "fooCLI");
        let root = Generator::new(&config, &vcs).generate(&request, work.path()).unwrap();

        assert_eq!(root, work.path().join("fooCLI"));
        assert_eq!(
            fs::read_to_string(root.join("cmd/foocli/main.go")).unwrap(),
            "package main\n\n// fooCLI\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("go.mod")).unwrap(),
            "module github.com/x/fooCLI\n"
        );
        assert_eq!(vcs.calls.get(), 3);
    }

    #[test]
    fn module_file_is_written_when_template_has_none() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let templates = home.path().join("templates");
        fs::create_dir_all(templates.join("empty")).unwrap();
        fs::write(templates.join("empty/main-tpl.go"), "package main\n").unwrap();
        let config = Config::new(templates);
        let vcs = CountingVcs::default();

        let request = GenerateRequest::new("github.com/x", "empty", "demo");
        let root = Generator::new(&config, &vcs).generate(&request, work.path()).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("go.mod")).unwrap(),
            "module github.com/x/demo\n\ngo 1.21\n"
        );
    }

    #[test]
    fn unknown_template_writes_nothing() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = config_with_cli_template(home.path());
        let vcs = CountingVcs::default();

        let request = GenerateRequest::new("", "web", "demo");
        let err = Generator::new(&config, &vcs).generate(&request, work.path()).unwrap_err();

        assert!(matches!(err, Error::TemplateNotFound { .. }));
        assert!(!work.path().join("demo").exists());
        assert_eq!(vcs.calls.get(), 0);
    }

    #[test]
    fn invalid_project_name_is_rejected_before_any_write() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = config_with_cli_template(home.path());
        let vcs = CountingVcs::default();

        let request = GenerateRequest::new("", "cli", "../escape");
        let err = Generator::new(&config, &vcs).generate(&request, work.path()).unwrap_err();

        assert!(matches!(err, Error::InvalidProjectName { .. }));
        assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
    }
}

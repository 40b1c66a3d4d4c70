use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

use super::Vcs;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Short description of a failed run for error messages.
    fn describe(&self) -> String {
        let status = match self.status {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        let output = [self.stderr.trim(), self.stdout.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if output.is_empty() {
            status
        } else {
            format!("{status}: {output}")
        }
    }
}

/// Runs external programs.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> std::io::Result<CommandOutput>;
}

/// Runs programs with [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> std::io::Result<CommandOutput> {
        debug!("Running '{program} {}' in '{}'", args.join(" "), working_dir.display());
        let output = Command::new(program).args(args).current_dir(working_dir).output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Backend driving the `git` executable.
pub struct GitCli<R: CommandRunner = SystemRunner> {
    runner: R,
}

impl GitCli<SystemRunner> {
    pub fn new() -> Self {
        Self { runner: SystemRunner }
    }
}

impl Default for GitCli<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> GitCli<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Runs `git <args>` in `root`, turning any failure into `make_error`.
    fn git<F>(&self, root: &Path, args: &[&str], make_error: F) -> Result<()>
    where
        F: FnOnce(PathBuf, String) -> Error,
    {
        let reason = match self.runner.run("git", args, root) {
            Ok(output) if output.success() => return Ok(()),
            Ok(output) => output.describe(),
            Err(e) => format!("failed to run git: {e}"),
        };
        Err(make_error(root.to_path_buf(), reason))
    }
}

impl<R: CommandRunner> Vcs for GitCli<R> {
    fn init(&self, root: &Path) -> Result<()> {
        self.git(root, &["init", "-q"], |path, reason| Error::VcsInitFailed { path, reason })
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        self.git(root, &["add", "--all"], |path, reason| Error::VcsStageFailed { path, reason })
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        self.git(root, &["commit", "-q", "-m", message], |path, reason| {
            Error::VcsCommitFailed { path, reason }
        })
    }
}

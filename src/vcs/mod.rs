//! Repository bootstrap of a generated project
//!
//! - `libgit2`: in-process backend built on `git2`
//! - `command`: backend driving the `git` executable

pub mod command;
pub mod libgit2;

use log::{debug, info};
use std::fmt;
use std::path::Path;

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::Result;

pub use command::{CommandOutput, CommandRunner, GitCli, SystemRunner};
pub use libgit2::Git2Vcs;

/// A version control backend able to turn a directory into a repository
/// with a single commit.
pub trait Vcs {
    /// Creates an empty repository in `root`.
    fn init(&self, root: &Path) -> Result<()>;

    /// Stages every file under `root`.
    fn stage_all(&self, root: &Path) -> Result<()>;

    /// Records the staged tree as a commit.
    fn commit(&self, root: &Path, message: &str) -> Result<()>;
}

/// Progress of a bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsState {
    Uninitialized,
    Initialized,
    Staged,
    Committed,
}

impl fmt::Display for VcsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VcsState::Uninitialized => "uninitialized",
            VcsState::Initialized => "initialized",
            VcsState::Staged => "staged",
            VcsState::Committed => "committed",
        };
        f.write_str(name)
    }
}

impl VcsState {
    /// Runs the step leading out of this state.
    ///
    /// Returns `None` once committed.
    fn advance(self, vcs: &dyn Vcs, root: &Path) -> Option<Result<VcsState>> {
        let step = match self {
            VcsState::Uninitialized => vcs.init(root).map(|_| VcsState::Initialized),
            VcsState::Initialized => vcs.stage_all(root).map(|_| VcsState::Staged),
            VcsState::Staged => {
                vcs.commit(root, INITIAL_COMMIT_MESSAGE).map(|_| VcsState::Committed)
            }
            VcsState::Committed => return None,
        };
        Some(step)
    }
}

/// Initializes a repository in `root`, stages everything and creates the
/// initial commit. Stops at the first failing step.
pub fn bootstrap<P: AsRef<Path>>(vcs: &dyn Vcs, root: P) -> Result<VcsState> {
    let root = root.as_ref();
    info!("Initializing repository in '{}'", root.display());

    let mut state = VcsState::Uninitialized;
    while let Some(next) = state.advance(vcs, root) {
        state = next?;
        debug!("Repository in '{}' is {state}", root.display());
    }
    Ok(state)
}

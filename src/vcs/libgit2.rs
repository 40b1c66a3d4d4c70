use git2::{IndexAddOption, Repository, Signature};
use log::debug;
use std::path::Path;

use crate::constants::signature;
use crate::error::{Error, Result};

use super::Vcs;

/// Backend using libgit2 in-process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Vcs;

impl Git2Vcs {
    pub fn new() -> Self {
        Self
    }

    /// Author from git configuration, or the fallback identity.
    fn signature(repo: &Repository) -> std::result::Result<Signature<'static>, git2::Error> {
        repo.signature().or_else(|e| {
            debug!("No git identity configured ({}), using fallback", e.message());
            Signature::now(signature::NAME, signature::EMAIL)
        })
    }
}

impl Vcs for Git2Vcs {
    fn init(&self, root: &Path) -> Result<()> {
        Repository::init(root).map(|_| ()).map_err(|e| Error::VcsInitFailed {
            path: root.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        let stage = || -> std::result::Result<(), git2::Error> {
            let repo = Repository::open(root)?;
            let mut index = repo.index()?;
            index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
            index.write()
        };
        stage().map_err(|e| Error::VcsStageFailed {
            path: root.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        let commit = || -> std::result::Result<git2::Oid, git2::Error> {
            let repo = Repository::open(root)?;
            let tree_id = repo.index()?.write_tree()?;
            let tree = repo.find_tree(tree_id)?;
            let author = Self::signature(&repo)?;
            repo.commit(Some("HEAD"), &author, &author, message, &tree, &[])
        };
        let oid = commit().map_err(|e| Error::VcsCommitFailed {
            path: root.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        debug!("Created commit {oid}");
        Ok(())
    }
}

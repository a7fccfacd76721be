use anyhow::{bail, Context, Result};
use git2::Repository;
use std::path::PathBuf;

/// Source of the branch currently checked out in the working copy.
pub trait CurrentBranch {
    fn current_branch(&self) -> Result<String>;
}

pub struct LocalRepository {
    path: PathBuf,
}

impl LocalRepository {
    pub fn new() -> Self {
        LocalRepository::at(".")
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        LocalRepository { path: path.into() }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentBranch for LocalRepository {
    fn current_branch(&self) -> Result<String> {
        let repo = Repository::open(&self.path).context("Cannot open the local git repository")?;

        let head = repo
            .head()
            .context("Cannot read HEAD of the local git repository")?;

        if !head.is_branch() {
            bail!("HEAD does not point at a branch, supply --base explicitly");
        }

        match head.shorthand() {
            Some(branch) => Ok(branch.to_owned()),
            None => bail!("The current branch name is not valid utf-8"),
        }
    }
}

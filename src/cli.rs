use crate::{git::CurrentBranch, github::repository::Repository};
use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "openpr", version, about = "Open a pull request on github from the command line")]
pub struct Cli {
    /// The title of your pull request
    #[arg(long)]
    pub title: String,

    /// The target branch of your pull request
    #[arg(long)]
    pub target: String,

    /// The base branch for your pull request, defaults to the branch
    /// currently checked out in the local repository
    #[arg(long)]
    pub base: Option<String>,

    /// The description of your pull request
    #[arg(long)]
    pub description: String,

    /// The target repository for your pull request
    #[arg(long, value_name = "OWNER/REPOSITORY")]
    pub target_repository: String,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved inputs of the single create call.
#[derive(Debug)]
pub struct PullRequestOptions {
    pub repository: Repository,
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

impl Cli {
    /// Validates the parsed flags and fills the base branch from the working
    /// copy when it was not supplied. Runs before any network activity.
    pub fn resolve(self, branches: &impl CurrentBranch) -> Result<PullRequestOptions> {
        if self.title.is_empty() {
            bail!("Must supply a pull request title");
        }

        if self.target.is_empty() {
            bail!("Must supply a pull request target branch");
        }

        if self.description.is_empty() {
            bail!("Must supply a description for your pull request");
        }

        if self.target_repository.is_empty() {
            bail!("Must supply a target repository for your pull request");
        }

        let repository = self.target_repository.parse::<Repository>()?;

        let base = match self.base {
            Some(base) if !base.is_empty() => base,
            _ => branches
                .current_branch()
                .context("Cannot resolve the base branch from the local repository")?,
        };

        if base.is_empty() {
            bail!("Must supply a base branch for your pull request");
        }

        Ok(PullRequestOptions {
            repository,
            title: self.title,
            head: self.target,
            base,
            body: self.description,
        })
    }
}

mod cli;
mod git;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use git::LocalRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose)?;

    let options = cli
        .resolve(&LocalRepository::new())
        .context("Cannot resolve the pull request options")?;

    log::info!(
        "Opening pull request {} -> {} on {}",
        options.head,
        options.base,
        options.repository
    );

    let pull_request = github::open_pull_request(options)
        .await
        .context("Cannot open the pull request")?;

    log::info!(
        "Pull request #{} opened: {}",
        pull_request.number,
        pull_request.html_url
    );

    Ok(())
}

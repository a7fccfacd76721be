mod builder;
mod credentials;
mod dto;
mod github_client;
mod handler;
mod macros;
mod request;
pub mod repository;
pub mod response;

use crate::cli::PullRequestOptions;
use anyhow::Result;
use builder::BuilderExecutor;
use response::PullRequest;

pub async fn open_pull_request(options: PullRequestOptions) -> Result<PullRequest> {
    log::debug!("Creating pull request on {}", options.repository);

    github_client::instance()
        .repo(options.repository)
        .pull_request()
        .create()
        .title(options.title)
        .head(options.head)
        .base(options.base)
        .body(options.body)
        .execute()
        .await
}

use super::{
    credentials,
    dto::pull_request_dto::PullRequestDto,
    handler::repository_handler::RepositoryHandler,
    repository::Repository,
    request::{PullRequestRequest, SerializeRequest},
    response::PullRequest,
};
use crate::{http::Error, post};
use anyhow::Result;
use once_cell::sync::Lazy;
use std::env;

pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

static CLIENT: Lazy<GithubClient> = Lazy::new(|| GithubClient);

pub fn instance() -> &'static GithubClient {
    &CLIENT
}

pub struct GithubClient;

impl GithubClient {
    pub fn repo(&self, repository: Repository) -> RepositoryHandler {
        RepositoryHandler::new(repository)
    }

    pub(super) async fn create_pull_request(
        &self,
        pull_request: PullRequestDto,
    ) -> Result<PullRequest> {
        log::debug!("Creating pull request");

        let token = credentials::github_token()?;

        let uri = format!(
            "{}{}",
            api_base_url(),
            pull_request.repository.pulls_path()
        );

        let request = PullRequestRequest::new(
            pull_request.title,
            pull_request.head,
            pull_request.base,
            pull_request.pr_body,
        );

        let body = request.into_request()?;

        let response = post!(&uri, body, &token)?;

        let pr = serde_json::from_str::<PullRequest>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(pr)
    }
}

/// Honors GITHUB_API_URL so enterprise hosts can be targeted.
fn api_base_url() -> String {
    env::var(GITHUB_API_URL_VAR).unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::builder::BuilderExecutor;
    use mockito::{Matcher, Server};
    use serde_json::json;

    // Scenarios share one server because GITHUB_API_URL and GITHUB_TOKEN are
    // process-global.
    #[tokio::test]
    async fn should_create_a_pull_request() -> Result<()> {
        let mut server = Server::new_async().await;
        env::set_var(GITHUB_API_URL_VAR, server.url());
        env::set_var(credentials::GITHUB_TOKEN_VAR, "test_token");

        let created = server
            .mock("POST", "/repos/acme/widgets/pulls")
            .match_header("authorization", "Bearer test_token")
            .match_body(Matcher::Json(json!({
                "title": "Add widget support",
                "head": "feature/widgets",
                "base": "main",
                "body": "Adds the widget module",
            })))
            .with_status(201)
            .with_body(
                r#"{"number": 42, "state": "open", "html_url": "https://github.com/acme/widgets/pull/42"}"#,
            )
            .create_async()
            .await;

        let pr = instance()
            .repo(Repository::new("acme", "widgets"))
            .pull_request()
            .create()
            .title("Add widget support")
            .head("feature/widgets")
            .base("main")
            .body("Adds the widget module")
            .execute()
            .await?;

        created.assert_async().await;
        assert_eq!(pr.number, 42);
        assert_eq!(pr.html_url, "https://github.com/acme/widgets/pull/42");

        let rejected = server
            .mock("POST", "/repos/acme/gizmos/pulls")
            .with_status(422)
            .with_body(r#"{"message": "Validation Failed"}"#)
            .create_async()
            .await;

        let result = instance()
            .repo(Repository::new("acme", "gizmos"))
            .pull_request()
            .create()
            .title("Add gizmo support")
            .head("feature/gizmos")
            .base("main")
            .body("Adds the gizmo module")
            .execute()
            .await;

        rejected.assert_async().await;
        assert!(result.is_err());

        let empty = server
            .mock("POST", "/repos/acme/sprockets/pulls")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let result = instance()
            .repo(Repository::new("acme", "sprockets"))
            .pull_request()
            .create()
            .title("Add sprocket support")
            .head("feature/sprockets")
            .base("main")
            .body("Adds the sprocket module")
            .execute()
            .await;

        empty.assert_async().await;
        assert!(result.is_err());

        Ok(())
    }
}

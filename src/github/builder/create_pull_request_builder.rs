use super::BuilderExecutor;
use crate::github::{
    dto::pull_request_dto::PullRequestDto, github_client, repository::Repository,
    response::PullRequest,
};

pub struct CreatePullRequestBuilder {
    pub repository: Repository,
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: Option<String>,
}

impl CreatePullRequestBuilder {
    pub fn new(repository: Repository) -> Self {
        CreatePullRequestBuilder {
            repository,
            title: String::new(),
            head: String::new(),
            base: String::new(),
            body: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl BuilderExecutor for CreatePullRequestBuilder {
    type Output = PullRequest;

    async fn execute(self) -> anyhow::Result<Self::Output> {
        let pull_request = PullRequestDto::new(
            self.repository,
            self.title,
            self.head,
            self.base,
            self.body.unwrap_or_default(),
        );

        github_client::instance()
            .create_pull_request(pull_request)
            .await
    }
}

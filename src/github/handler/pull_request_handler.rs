use crate::github::{builder::CreatePullRequestBuilder, repository::Repository};

pub struct PullRequestHandler {
    repository: Repository,
}

impl PullRequestHandler {
    pub fn new(repository: Repository) -> Self {
        PullRequestHandler { repository }
    }

    pub fn create(&self) -> CreatePullRequestBuilder {
        CreatePullRequestBuilder::new(self.repository.clone())
    }
}

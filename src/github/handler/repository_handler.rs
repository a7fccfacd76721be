use super::pull_request_handler::PullRequestHandler;
use crate::github::repository::Repository;

pub struct RepositoryHandler {
    repository: Repository,
}

impl RepositoryHandler {
    pub fn new(repository: Repository) -> Self {
        RepositoryHandler { repository }
    }

    pub fn pull_request(&self) -> PullRequestHandler {
        PullRequestHandler::new(self.repository.clone())
    }
}

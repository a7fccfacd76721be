use crate::github::repository::Repository;

pub struct PullRequestDto {
    pub repository: Repository,
    pub title: String,
    pub head: String,
    pub base: String,
    pub pr_body: String,
}

impl PullRequestDto {
    pub fn new(
        repository: Repository,
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        pr_body: impl Into<String>,
    ) -> Self {
        PullRequestDto {
            repository,
            title: title.into(),
            head: head.into(),
            base: base.into(),
            pr_body: pr_body.into(),
        }
    }
}

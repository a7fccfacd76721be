use serde::Deserialize;

/// The created pull request, as reported back by the api.
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: String,
}

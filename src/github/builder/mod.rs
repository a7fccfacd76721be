mod create_pull_request_builder;

pub use create_pull_request_builder::CreatePullRequestBuilder;

#[allow(async_fn_in_trait)]
pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> anyhow::Result<Self::Output>;
}

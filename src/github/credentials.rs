use anyhow::{bail, Context, Result};
use std::env;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Token attached as bearer authorization to every api call. Requests are
/// never sent without one.
pub fn github_token() -> Result<String> {
    read_token(GITHUB_TOKEN_VAR)
}

fn read_token(var: &str) -> Result<String> {
    let token = env::var(var).with_context(|| {
        format!(
            "{} must be set to a token allowed to open pull requests",
            var
        )
    })?;

    if token.is_empty() {
        bail!("{} is set but empty", var);
    }

    Ok(token)
}

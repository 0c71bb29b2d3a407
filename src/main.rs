use std::sync::Arc;

use github_demo_mcp::{
    config::Config, github_client::HttpGithubClient, logging, stdio::transport::run_session,
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let repo_host = Arc::new(HttpGithubClient::new(&config)?);
    let state = AppState::new(repo_host);

    info!(api_base = %config.api_base, "server starting");

    // An interrupt exits immediately without draining in-flight calls.
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        result = run_session(state, tokio::io::stdin(), tokio::io::stdout()) => {
            result?;
        }
    }

    Ok(())
}

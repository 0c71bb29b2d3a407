use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod errors;
pub mod github_client;
pub mod logging;
pub mod mcp;
pub mod stdio;

use github_client::RepoHost;

#[derive(Clone)]
pub struct AppState {
    pub repo_host: Arc<dyn RepoHost>,
}

impl AppState {
    pub fn new(repo_host: Arc<dyn RepoHost>) -> Self {
        Self { repo_host }
    }
}

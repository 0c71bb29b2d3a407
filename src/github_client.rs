use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFileContent {
    pub content: String,
    pub encoding: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

#[async_trait]
pub trait RepoHost: Send + Sync {
    async fn fetch_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<RawFileContent, AppError>;

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<CreatedIssue, AppError>;
}

#[derive(Debug, Deserialize)]
struct ContentsRecord {
    content: String,
    encoding: String,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    number: u64,
    html_url: String,
}

pub struct HttpGithubClient {
    http: reqwest::Client,
    api_base: Url,
    token: Option<String>,
}

impl HttpGithubClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        // Single-attempt calls; no retry and no timeout.
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|err| AppError::transport(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            token: config.github_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.api_base
            .join(path)
            .map_err(|err| AppError::transport(format!("invalid endpoint {path}: {err}")))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header(reqwest::header::ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl RepoHost for HttpGithubClient {
    async fn fetch_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<RawFileContent, AppError> {
        let url = self.endpoint(&format!("repos/{owner}/{repo}/contents/{path}"))?;
        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|err| AppError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(upstream_description(status, &body)));
        }

        let record: ContentsRecord = response
            .json()
            .await
            .map_err(|err| AppError::upstream(format!("unexpected contents response: {err}")))?;

        Ok(RawFileContent {
            content: record.content,
            encoding: record.encoding,
        })
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<CreatedIssue, AppError> {
        let url = self.endpoint(&format!("repos/{owner}/{repo}/issues"))?;
        let response = self
            .authorize(self.http.post(url))
            .json(&serde_json::json!({ "title": title, "body": body }))
            .send()
            .await
            .map_err(|err| AppError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(upstream_description(status, &text)));
        }

        let record: IssueRecord = response
            .json()
            .await
            .map_err(|err| AppError::upstream(format!("unexpected issue response: {err}")))?;

        Ok(CreatedIssue {
            number: record.number,
            url: record.html_url,
        })
    }
}

// The contents API wraps base64 payloads at 60 columns.
pub fn decode_file_text(raw: &RawFileContent) -> Result<String, AppError> {
    match raw.encoding.as_str() {
        "base64" => {
            let packed: String = raw
                .content
                .chars()
                .filter(|character| !character.is_whitespace())
                .collect();
            let bytes = STANDARD
                .decode(packed)
                .map_err(|err| AppError::upstream(format!("invalid base64 content: {err}")))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        other => Err(AppError::upstream(format!(
            "unsupported content encoding: {other}"
        ))),
    }
}

fn upstream_description(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        })
}

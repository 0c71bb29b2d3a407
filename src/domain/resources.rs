//! Read-only resources backed by the hosting API
//!
//! Exposes repository file content as the `repo:file` resource.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::github_client::decode_file_text;
use crate::mcp::rpc::{json_rpc_error, json_rpc_result};
use crate::AppState;

pub const REPO_FILE_RESOURCE: &str = "repo:file";

#[derive(Debug, Deserialize)]
pub struct FetchFileParams {
    pub owner: String,
    pub repo: String,
    pub path: String,
}

pub async fn handle_get_resource(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32601, "Method not found");
    };

    let name = raw_params
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    match name.as_deref() {
        Some(REPO_FILE_RESOURCE) => {
            let args: FetchFileParams = match serde_json::from_value(raw_params) {
                Ok(value) => value,
                Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
            };

            match state
                .repo_host
                .fetch_file_content(&args.owner, &args.repo, &args.path)
                .await
                .and_then(|raw| decode_file_text(&raw))
            {
                Ok(text) => json_rpc_result(id, json!({ "mime": "text/plain", "data": text })),
                Err(err) => json_rpc_error(id, -32001, &err.to_string()),
            }
        }
        _ => json_rpc_error(id, -32601, "Method not found"),
    }
}

//! Side-effecting tools backed by the hosting API
//!
//! Exposes issue creation as the `createIssue` tool.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::mcp::rpc::{json_rpc_error, json_rpc_result};
use crate::AppState;

pub const CREATE_ISSUE_TOOL: &str = "createIssue";

#[derive(Debug, Deserialize)]
pub struct CreateIssueParams {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
}

pub async fn handle_call_tool(state: &AppState, id: Option<Value>, params: Option<Value>) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32601, "Method not found");
    };

    let name = raw_params
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    match name.as_deref() {
        Some(CREATE_ISSUE_TOOL) => {
            let args: CreateIssueParams = match serde_json::from_value(raw_params) {
                Ok(value) => value,
                Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
            };

            match state
                .repo_host
                .create_issue(&args.owner, &args.repo, &args.title, &args.body)
                .await
            {
                Ok(issue) => {
                    json_rpc_result(id, json!({ "number": issue.number, "url": issue.url }))
                }
                Err(err) => json_rpc_error(id, -32002, &err.to_string()),
            }
        }
        _ => json_rpc_error(id, -32601, "Method not found"),
    }
}

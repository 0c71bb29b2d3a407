//! Parameterized prompt templates
//!
//! Exposes the fixed `repo-summary` template. No remote call is involved and
//! extra params are ignored.

use serde_json::{json, Value};

use crate::mcp::rpc::{json_rpc_error, json_rpc_result};

pub const REPO_SUMMARY_PROMPT: &str = "repo-summary";

const REPO_SUMMARY_TEMPLATE: &str = "Summarize the file {{path}} in repository {{owner}}/{{repo}}";

pub fn handle_get_prompt(id: Option<Value>, params: Option<Value>) -> Value {
    let name = params
        .as_ref()
        .and_then(|value| value.get("name"))
        .and_then(Value::as_str);

    match name {
        Some(REPO_SUMMARY_PROMPT) => json_rpc_result(
            id,
            json!({
                "template": REPO_SUMMARY_TEMPLATE,
                "variables": ["owner", "repo", "path"],
            }),
        ),
        _ => json_rpc_error(id, -32601, "Method not found"),
    }
}

//! The central dispatch engine for the stdio JSON-RPC protocol
//!
//! Decodes candidate input lines, routes requests by method name, and
//! suppresses responses to notifications. Malformed input is dropped without
//! any output on the protocol stream.

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{
    prompts::{handle_get_prompt, REPO_SUMMARY_PROMPT},
    resources::{handle_get_resource, REPO_FILE_RESOURCE},
    tools::{handle_call_tool, CREATE_ISSUE_TOOL},
};
use crate::mcp::protocol::{CapabilityAnnouncement, JsonRpcNotification};
use crate::mcp::rpc::{is_json_rpc_error, json_rpc_error};
use crate::AppState;

pub const SERVER_NAME: &str = "github-demo";

pub fn capabilities_announcement() -> Value {
    let announcement = JsonRpcNotification::new(
        "capabilities",
        CapabilityAnnouncement {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            resources: vec![REPO_FILE_RESOURCE.to_string()],
            tools: vec![CREATE_ISSUE_TOOL.to_string()],
            prompts: vec![REPO_SUMMARY_PROMPT.to_string()],
        },
    );

    serde_json::to_value(announcement).expect("capabilities announcement serialization")
}

pub async fn handle_json_rpc_line(state: &AppState, line: &str) -> Option<Value> {
    let payload: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(_) => {
            debug!("dropping unparseable input line");
            return None;
        }
    };

    handle_json_rpc_value(state, payload).await
}

pub async fn handle_json_rpc_value(state: &AppState, payload: Value) -> Option<Value> {
    let Some(message) = payload.as_object() else {
        debug!("dropping non-object message");
        return None;
    };

    // A null id counts as absent, matching the wire behavior clients rely on.
    let id = message.get("id").filter(|value| !value.is_null()).cloned();
    let method = message
        .get("method")
        .and_then(Value::as_str)
        .map(str::to_string);
    let params = message.get("params").cloned();
    let is_request = id.is_some();

    let response = handle_json_rpc_request(state, id, method.as_deref(), params).await;

    info!(
        method = method.as_deref().unwrap_or("<none>"),
        outcome = if is_json_rpc_error(&response) {
            "failure"
        } else {
            "success"
        },
        "message dispatched"
    );

    if is_request {
        Some(response)
    } else {
        debug!("suppressing response to notification");
        None
    }
}

pub async fn handle_json_rpc_request(
    state: &AppState,
    id: Option<Value>,
    method: Option<&str>,
    params: Option<Value>,
) -> Value {
    match method {
        Some("getResource") => handle_get_resource(state, id, params).await,
        Some("callTool") => handle_call_tool(state, id, params).await,
        Some("getPrompt") => handle_get_prompt(id, params),
        _ => json_rpc_error(id, -32601, "Method not found"),
    }
}

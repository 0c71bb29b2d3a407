//! JSON-RPC response formatting utilities
//!
//! Maps handler outcomes onto wire-ready `serde_json::Value` envelopes.

use serde_json::Value;

use crate::mcp::protocol::JsonRpcResponse;

pub fn is_json_rpc_error(value: &Value) -> bool {
    value.get("error").is_some()
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    let response = JsonRpcResponse::success(id.unwrap_or(Value::Null), result);
    serde_json::to_value(response).expect("jsonrpc result response serialization")
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    let response = JsonRpcResponse::error(id.unwrap_or(Value::Null), code, message);
    serde_json::to_value(response).expect("jsonrpc error response serialization")
}

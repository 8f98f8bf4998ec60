//! Invocation and response envelopes exchanged with the orchestration layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named argument supplied by the orchestration layer. Values arrive
/// as strings regardless of their logical type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Inbound invocation envelope.
///
/// Fields the caller omits default to empty, matching the lenient
/// contract of the orchestration layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    #[serde(default)]
    pub action_group: String,
    #[serde(default)]
    pub api_path: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Outbound response envelope. `response` is either the success payload
/// or a structured error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub response: Value,
}

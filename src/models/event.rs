//! Inbound event model for Amazon Bedrock Agents action-group functions.
//!
//! Bedrock invokes the Lambda with one of these per function call. Fields the
//! relay copies back (`actionGroup`, `function`, the session attribute maps)
//! are required; anything else Bedrock sends is tolerated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bedrock Agents function invocation event
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    /// Agent descriptor (name, id, alias, version). Not interpreted.
    pub agent: Value,
    pub action_group: String,
    pub function: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub session_attributes: Map<String, Value>,
    pub prompt_session_attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// A single function parameter as supplied by the agent
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub value: String,
}

impl InvocationEvent {
    /// Value of the first supplied parameter, which carries the wallet address.
    #[must_use]
    pub fn first_parameter_value(&self) -> Option<&str> {
        self.parameters.first().map(|p| p.value.as_str())
    }
}

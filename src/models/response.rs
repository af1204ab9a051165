use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::event::InvocationEvent;

/// Envelope version Bedrock Agents expects from action-group Lambdas
pub const MESSAGE_VERSION: &str = "1.0";

/// Response returned to Bedrock Agents for a function invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub message_version: String,
    pub response: FunctionResponse,
    pub session_attributes: Map<String, Value>,
    pub prompt_session_attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponseBody {
    pub response_body: ResponseBody,
}

/// Bedrock keys the content type in upper case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBody {
    pub body: String,
}

impl ActionResponse {
    /// Wraps `body` for the invocation it answers.
    ///
    /// `actionGroup`, `function` and both session attribute maps are moved over
    /// from the event untouched so Bedrock can correlate the reply.
    #[must_use]
    pub fn from_event(event: InvocationEvent, body: String) -> Self {
        Self {
            message_version: MESSAGE_VERSION.to_string(),
            response: FunctionResponse {
                action_group: event.action_group,
                function: event.function,
                function_response: FunctionResponseBody {
                    response_body: ResponseBody {
                        text: TextBody { body },
                    },
                },
            },
            session_attributes: event.session_attributes,
            prompt_session_attributes: event.prompt_session_attributes,
        }
    }

    /// The relayed upstream body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.response.function_response.response_body.text.body
    }
}

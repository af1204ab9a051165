//! Bedrock Agents function schema for the action group.
//!
//! Bedrock describes action-group functions with a flat parameter map
//! (`type`, `description`, `required`) rather than JSON Schema, so the
//! schemars output for the argument struct is folded into that shape.

use schemars::{JsonSchema, schema_for};
use serde_json::{Map, Value, json};

use crate::models::{AppError, WalletTransactionsArgs};

/// Function name declared to Bedrock for the transactions lookup
pub const FUNCTION_NAME: &str = "get_wallet_transactions";

pub const FUNCTION_DESCRIPTION: &str = "Get the transaction history of an EVM wallet address across supported chains. Returns the raw JSON from the Sim API, including hashes, block numbers, senders, recipients and values.";

/// Builds the `functionSchema` document for the action group.
///
/// # Errors
///
/// Returns `AppError::ConfigError` if the argument type does not produce an object schema.
pub fn function_schema() -> Result<Value, AppError> {
    Ok(json!({
        "functions": [{
            "name": FUNCTION_NAME,
            "description": FUNCTION_DESCRIPTION,
            "parameters": bedrock_parameters::<WalletTransactionsArgs>()?,
        }]
    }))
}

/// Converts the JSON Schema of `T` into Bedrock's parameter map.
///
/// # Errors
///
/// Returns `AppError::ConfigError` if `T` has no object properties.
pub fn bedrock_parameters<T: JsonSchema>() -> Result<Value, AppError> {
    let schema = serde_json::to_value(schema_for!(T))
        .map_err(|e| AppError::ConfigError(format!("Failed to serialize schema: {e}")))?;

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| AppError::ConfigError("Schema has no properties".to_string()))?;

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut parameters = Map::new();
    for (name, property) in properties {
        // Optional fields come out as ["<type>", "null"]
        let kind = match property.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(Value::Array(kinds)) => kinds
                .iter()
                .filter_map(Value::as_str)
                .find(|kind| *kind != "null")
                .unwrap_or("string"),
            _ => "string",
        };
        let description = property
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        parameters.insert(
            name.clone(),
            json!({
                "type": kind,
                "description": description,
                "required": required.contains(&name.as_str()),
            }),
        );
    }

    Ok(Value::Object(parameters))
}

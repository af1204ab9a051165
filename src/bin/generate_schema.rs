//! Schema generator for the Amazon Bedrock Agents action group.
//!
//! This binary writes `function_schema.json`, the function details document
//! to paste into (or deploy as) the action group's `functionSchema`.

use std::fs;

use sim_transactions_lambda::schema::function_schema;

const OUTPUT_FILE: &str = "function_schema.json";

fn main() {
    let schema = function_schema().unwrap_or_else(|e| {
        eprintln!("Failed to build function schema: {e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write(OUTPUT_FILE, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {OUTPUT_FILE}: {e}");
        std::process::exit(1);
    });

    println!("✅ Generated {OUTPUT_FILE}");
}

//! AWS Lambda action-group function for Amazon Bedrock Agents that relays
//! wallet transaction lookups to the Dune Sim API.

pub mod config;
pub mod handler;
pub mod http;
pub mod models;
pub mod schema;
pub mod tools;
pub mod utils;

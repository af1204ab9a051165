use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use sim_transactions_lambda::config::RelayConfig;
use sim_transactions_lambda::handler::{TransactionRelay, function_handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = RelayConfig::from_env().context("Failed to load relay configuration")?;
    let relay = TransactionRelay::with_reqwest(config).context("Failed to build Sim API client")?;
    let relay = &relay;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, relay).await
    }))
    .await
}

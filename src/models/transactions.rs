use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments of the wallet transactions function, as declared to Bedrock
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct WalletTransactionsArgs {
    #[schemars(description = "EVM wallet address (0x-prefixed hex) whose transactions to fetch")]
    pub wallet_address: String,
}

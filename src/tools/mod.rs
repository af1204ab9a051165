pub mod transactions;

pub use transactions::{API_KEY_HEADER, fetch_wallet_transactions};

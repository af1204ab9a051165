pub mod error;
pub mod event;
pub mod response;
pub mod transactions;

pub use error::AppError;
pub use event::{InvocationEvent, Parameter};
pub use response::{ActionResponse, FunctionResponse, FunctionResponseBody, ResponseBody, TextBody};
pub use transactions::WalletTransactionsArgs;

//! Chain-agnostic types shared by the flows and the adapters.

mod amount;
mod balance;
mod direction;
mod error;
mod status;
mod token;
mod tx;

pub use amount::{format_units, to_base_units, AmountError, AmountInput, TOKEN_DECIMALS};
pub use balance::{Balance, BalanceSnapshot, UNKNOWN_BALANCE};
pub use direction::Direction;
pub use error::{FlowError, UNKNOWN_ERROR};
pub use status::OperationStatus;
pub use token::{TokenSelector, UnknownToken};
pub use tx::TxHandle;

//! Application services (use cases).
//!
//! The flows here drive the contract gateway and hold all UI-side state.
//! They are presentation-agnostic; the CLI renders them.

pub mod approval;
pub mod balance;
pub mod dashboard;
pub mod transaction;

pub use approval::ApprovalFlow;
pub use balance::BalanceView;
pub use dashboard::Dashboard;
pub use transaction::{Rejection, TransactionFlow};

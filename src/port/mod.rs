//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`ContractGateway`] - Reads and writes against the pool and its tokens
//! - [`WalletSession`] - Connected account and signing capability

pub mod outbound;

pub use outbound::gateway::{BalanceSource, ContractGateway, GatewayError};
pub use outbound::session::{SessionState, WalletSession};

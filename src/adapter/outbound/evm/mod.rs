//! EVM adapters: alloy contract bindings, gateway and local wallet.

pub mod contract;
pub mod gateway;
pub mod wallet;

pub use gateway::EvmGateway;
pub use wallet::LocalWallet;

//! Hooktuah - a terminal client for the HookTuah token pool.
//!
//! Connects a local wallet to the pool contract on Base Sepolia, shows the
//! account's deposited balance of both pool tokens, and submits approvals,
//! deposits and withdrawals.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Token selection, fixed-point amounts, balances and the
//!   operation status state machine
//! - [`port`] - The contract gateway and wallet session contracts
//! - [`application`] - Approval, balance and transaction flows composed into
//!   a [`application::Dashboard`]
//! - [`adapter`] - Alloy-backed gateway and wallet, plus the CLI
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted gateway for exercising flows without a chain
//! - `integration-tests` - Tests that talk to the live Base Sepolia deployment
//!
//! # Example
//!
//! ```no_run
//! use hooktuah::infrastructure::{bootstrap, config::Config};
//!
//! # async fn run() -> hooktuah::error::Result<()> {
//! let config = Config::from_env()?;
//! let runtime = bootstrap::connect(&config, None).await?;
//! println!("{:?}", runtime.dashboard.balances().display_pair());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

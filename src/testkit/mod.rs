//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`gateway`] - [`ScriptedGateway`](gateway::ScriptedGateway), a recording
//!   in-memory contract gateway.

pub mod gateway;

//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`]: the command-line interface driving the dashboard.
//! - [`outbound`]: the EVM gateway and local wallet behind the ports.

pub mod inbound;
pub mod outbound;

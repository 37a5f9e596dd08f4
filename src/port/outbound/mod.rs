//! Outbound ports: what the flows need from the outside world.

pub mod gateway;
pub mod session;

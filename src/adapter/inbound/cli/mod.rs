//! CLI module graph.

pub mod approve;
pub mod balances;
pub mod check;
pub mod command;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod output;
pub mod prompt;
pub mod render;
pub mod transact;
pub mod wallet;

//! Infrastructure configuration modules.

pub mod logging;
pub mod network;
pub mod settings;
pub mod wallet;

pub use settings::Config;

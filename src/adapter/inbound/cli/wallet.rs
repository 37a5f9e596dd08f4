//! Handlers for the `wallet` command group.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::evm::LocalWallet;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Show the wallet address derived from the configured key material.
pub fn execute_address(config: &Config) -> Result<()> {
    let address = LocalWallet::from_config(config)?.require_address()?;

    if output::is_json() {
        output::json_output("wallet", json!({ "address": address }));
        return Ok(());
    }

    output::section("Wallet Address");
    output::field("Address", address);
    Ok(())
}

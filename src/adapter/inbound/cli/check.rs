//! Handler for the `check` command group.

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::evm::{EvmGateway, LocalWallet};
use crate::error::{ConfigError, ExecutionError, Result};
use crate::infrastructure::config::Config;

/// Verify the RPC endpoint answers and serves the configured chain.
pub async fn execute_connection(config: &Config) -> Result<()> {
    output::section("Connection Check");
    output::field("Network", &config.network.name);
    output::field("RPC", &config.network.rpc_url);

    let gateway = EvmGateway::from_config(config, &LocalWallet::disconnected())?;

    let pb = output::spinner("Querying chain id...");
    let chain_id = match gateway.chain_id().await {
        Ok(chain_id) => chain_id,
        Err(e) => {
            output::spinner_fail(&pb, "RPC endpoint unreachable");
            return Err(ExecutionError::Failed(e.to_string()).into());
        }
    };

    if chain_id != config.network.chain_id {
        output::spinner_fail(&pb, "Chain id mismatch");
        return Err(ConfigError::InvalidValue {
            field: "chain_id",
            reason: format!(
                "endpoint serves chain {chain_id}, expected {}",
                config.network.chain_id
            ),
        }
        .into());
    }

    output::spinner_success(&pb, &format!("Connected to chain {chain_id}"));
    output::success("Connection checks passed");
    Ok(())
}

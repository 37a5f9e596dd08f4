//! Handler for the `balances` command.

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::{output, render};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Read and print balances for the configured or watched account.
pub async fn execute(config: &Config, args: &WatchArgs) -> Result<()> {
    let pb = output::spinner("Reading balances...");
    let runtime = match bootstrap::connect(config, args.address).await {
        Ok(runtime) => runtime,
        Err(e) => {
            output::spinner_fail(&pb, "Failed to connect");
            return Err(e);
        }
    };

    let dashboard = &runtime.dashboard;
    let snapshot = dashboard.balances();
    let complete = snapshot.token0.is_known() && snapshot.token1.is_known();
    match (dashboard.session().account, complete) {
        (None, _) => output::spinner_success(&pb, "No wallet connected"),
        (Some(_), true) => output::spinner_success(&pb, "Balances read"),
        (Some(_), false) => output::spinner_fail(&pb, "Some balances could not be read"),
    }

    output::section("Session");
    output::field("Network", &config.network.name);
    if output::verbosity() > 0 {
        output::field("Chain ID", config.network.chain_id);
        output::field("Pool", &config.contracts.pool);
        output::field("Refreshes", dashboard.refresh_count());
    }
    render::session(dashboard.session());
    render::balances(dashboard);
    Ok(())
}

//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Builds the wallet session, the contract gateway and the dashboard from
//! an explicit [`Config`]; nothing here is global.

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::info;

use crate::adapter::outbound::evm::{EvmGateway, LocalWallet};
use crate::application::Dashboard;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::{ContractGateway, WalletSession};

/// Everything a command needs to drive the flows.
pub struct Runtime {
    pub wallet: LocalWallet,
    pub gateway: Arc<EvmGateway>,
    pub dashboard: Dashboard,
}

/// Build the wallet session, optionally overridden by a watch-only address.
///
/// # Errors
///
/// Returns an error if the configured key is malformed.
pub fn build_wallet(config: &Config, watch: Option<Address>) -> Result<LocalWallet> {
    match watch {
        Some(address) => Ok(LocalWallet::watch_only(address)),
        None => LocalWallet::from_config(config),
    }
}

/// Build the runtime with the wallet session attached, without any RPC.
///
/// # Errors
///
/// Returns an error if the wallet or gateway cannot be built.
pub fn build(config: &Config, watch: Option<Address>) -> Result<Runtime> {
    let wallet = build_wallet(config, watch)?;
    let gateway = Arc::new(EvmGateway::from_config(config, &wallet)?);
    let shared: Arc<dyn ContractGateway> = gateway.clone();
    let mut dashboard = Dashboard::new(shared, config.approval_units()?);

    info!(
        network = %config.network.name,
        chain_id = config.network.chain_id,
        account = ?wallet.account(),
        can_sign = wallet.can_sign(),
        "Connecting session"
    );
    dashboard.attach(&wallet);

    Ok(Runtime {
        wallet,
        gateway,
        dashboard,
    })
}

/// Build the runtime and perform the first balance read.
///
/// # Errors
///
/// Returns an error if the wallet or gateway cannot be built.
pub async fn connect(config: &Config, watch: Option<Address>) -> Result<Runtime> {
    let mut runtime = build(config, watch)?;
    runtime.dashboard.refresh().await;
    Ok(runtime)
}

//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::domain::format_units;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note("1. Set WALLET_PRIVATE_KEY or point wallet.keystore_path at a keystore");
    output::note(&format!(
        "2. Run: hooktuah --config {} config validate",
        path.display()
    ));
    output::note(&format!("3. Run: hooktuah --config {} console", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    let contracts = config.contracts()?;

    output::section("Network");
    output::field("Name", &config.network.name);
    output::field("Chain ID", config.network.chain_id);
    output::field("RPC", &config.network.rpc_url);
    output::field("Explorer", &config.network.explorer_url);

    output::section("Contracts");
    output::field("Pool", contracts.pool);
    output::field("Token0", contracts.token0);
    output::field("Token1", contracts.token1);

    output::section("Approval");
    output::field("Amount", format_units(config.approval_units()?));

    output::section("Wallet");
    if let Some(path) = &config.wallet.keystore_path {
        output::field("Keystore", path);
    }
    if config.wallet.has_key() {
        output::success("Signing key loaded");
    } else {
        output::warning("No signing key, writes are disabled");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this reports the outcome.
pub fn execute_validate(config: &Config, path: Option<&Path>) -> Result<()> {
    output::section("Config Validation");
    match path {
        Some(path) => output::field("Path", path.display()),
        None => output::field("Path", output::muted("(built-in defaults)")),
    }
    output::success("Configuration is valid");

    if !config.wallet.has_key() {
        output::warning("No signing key configured; only balances can be read");
    }
    Ok(())
}

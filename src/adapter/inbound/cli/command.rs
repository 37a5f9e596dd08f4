//! Command-line interface definitions.
//!
//! Defines the CLI structure for the hooktuah client using `clap`. Every
//! command works against the pool deployment named in the configuration;
//! without `--config` the built-in Base Sepolia defaults apply.

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Parser, Subcommand};

use crate::domain::TokenSelector;

/// Deposit and withdraw tokens in the HookTuah pool
#[derive(Parser, Debug)]
#[command(name = "hooktuah")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a configuration file (defaults to built-in Base Sepolia settings)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the hooktuah CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show deposited and wallet balances
    Balances(WatchArgs),

    /// Approve the pool to spend one of the tokens
    Approve(ApproveArgs),

    /// Deposit tokens into the pool
    Deposit(TransactArgs),

    /// Withdraw tokens from the pool
    Withdraw(TransactArgs),

    /// Open an interactive session
    Console(WatchArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Inspect the configured wallet
    #[command(subcommand)]
    Wallet(WalletCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `hooktuah check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Verify the RPC endpoint is reachable and on the configured chain.
    Connection,
}

/// Subcommands for `hooktuah wallet`.
#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Display the wallet address derived from the private key.
    Address,
}

/// Subcommands for `hooktuah config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a configuration file from the template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration for correctness.
    Validate,
}

/// Arguments for commands that can run against a watched address.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Read balances for this address instead of the configured wallet
    #[arg(long)]
    pub address: Option<Address>,
}

/// Arguments for the `approve` subcommand.
#[derive(Parser, Debug)]
pub struct ApproveArgs {
    /// Token to approve (token0 or token1)
    pub token: TokenSelector,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the `deposit` and `withdraw` subcommands.
#[derive(Parser, Debug)]
pub struct TransactArgs {
    /// Amount in whole tokens, e.g. 2.5
    pub amount: String,

    /// Token to move (token0 or token1)
    #[arg(long, short, default_value = "token0")]
    pub token: TokenSelector,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = "hooktuah.toml")]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

//! Route a parsed command line to its handler.

use tracing::info;

use crate::adapter::inbound::cli::command::{
    CheckCommand, Cli, Commands, ConfigCommand, WalletCommand,
};
use crate::adapter::inbound::cli::{
    approve, balances, check, config, console, transact, wallet,
};
use crate::domain::Direction;
use crate::error::Result;
use crate::infrastructure::config::Config;

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Load configuration, start logging, and run the selected command.
pub async fn execute(cli: &Cli) -> Result<()> {
    // Generating a config must work even when the current one is broken.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        return config::execute_init(&args.path, args.force);
    }

    let mut settings = Config::resolve(cli.config.as_deref())?;
    if cli.verbose > 0 {
        settings.logging = settings.logging.with_level(level_for(cli.verbose));
    }
    settings.init_logging();
    info!(command = ?cli.command, "hooktuah starting");

    match &cli.command {
        Commands::Balances(args) => balances::execute(&settings, args).await,
        Commands::Approve(args) => approve::execute(&settings, args).await,
        Commands::Deposit(args) => transact::execute(&settings, Direction::Deposit, args).await,
        Commands::Withdraw(args) => transact::execute(&settings, Direction::Withdraw, args).await,
        Commands::Console(args) => console::execute(&settings, args).await,
        Commands::Check(CheckCommand::Connection) => check::execute_connection(&settings).await,
        Commands::Wallet(WalletCommand::Address) => wallet::execute_address(&settings),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&settings),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(&settings, cli.config.as_deref())
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
    }
}

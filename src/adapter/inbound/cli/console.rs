//! Handler for the `console` command: an interactive session.
//!
//! The console keeps one dashboard alive between actions, so statuses
//! persist until the same flow runs again and balances are only re-read on
//! connect, on request, and after a successful deposit or withdraw.

use dialoguer::{Input, Select};
use tracing::debug;

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::{output, render};
use crate::application::Dashboard;
use crate::domain::{Direction, TokenSelector};
use crate::error::{ExecutionError, Result};
use crate::infrastructure::bootstrap::{self, Runtime};
use crate::infrastructure::config::Config;
use crate::port::WalletSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    SwitchToken,
    Approve(TokenSelector),
    Submit(Direction),
    Connect,
    Disconnect,
    Quit,
}

impl Action {
    fn menu(dashboard: &Dashboard) -> Vec<Self> {
        let mut actions = vec![Self::Refresh, Self::SwitchToken];
        actions.extend(TokenSelector::ALL.map(Self::Approve));
        actions.extend(Direction::ALL.map(Self::Submit));
        if dashboard.session().is_connected() {
            actions.push(Self::Disconnect);
        } else {
            actions.push(Self::Connect);
        }
        actions.push(Self::Quit);
        actions
    }

    fn label(self, dashboard: &Dashboard) -> String {
        match self {
            Self::Refresh => "Refresh balances".to_string(),
            Self::SwitchToken => format!(
                "Switch token ({} -> {})",
                dashboard.transaction().token(),
                dashboard.transaction().token().other()
            ),
            Self::Approve(token) => {
                if dashboard.approval(token).is_enabled() {
                    format!("Approve {token}")
                } else {
                    output::muted(format!("Approve {token} (pending)"))
                }
            }
            Self::Submit(direction) => {
                let token = dashboard.transaction().token();
                if dashboard.session().can_sign() {
                    format!("{} {token}", direction.label())
                } else {
                    output::muted(format!("{} {token} (no signer)", direction.label()))
                }
            }
            Self::Connect => "Connect wallet".to_string(),
            Self::Disconnect => "Disconnect wallet".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Run the interactive session until the user quits.
pub async fn execute(config: &Config, args: &WatchArgs) -> Result<()> {
    if output::is_json() {
        return Err(ExecutionError::Failed(
            "the console is interactive and does not support --json".to_string(),
        )
        .into());
    }

    let pb = output::spinner("Connecting...");
    let mut runtime = bootstrap::connect(config, args.address).await?;
    output::spinner_success(&pb, "Connected");
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Network", &config.network.name);

    let explorer = config.network.explorer_url.as_str();
    loop {
        render::dashboard(&runtime.dashboard, explorer);
        println!();

        let actions = Action::menu(&runtime.dashboard);
        let labels: Vec<String> = actions
            .iter()
            .map(|action| action.label(&runtime.dashboard))
            .collect();
        let choice = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(action) = choice.and_then(|index| actions.get(index).copied()) else {
            break;
        };
        debug!(?action, "Console action");
        if action == Action::Quit {
            break;
        }
        perform(&mut runtime, action).await?;
    }

    output::note("Goodbye");
    Ok(())
}

async fn perform(runtime: &mut Runtime, action: Action) -> Result<()> {
    let dashboard = &mut runtime.dashboard;
    match action {
        Action::Refresh => {
            let pb = output::spinner("Reading balances...");
            dashboard.refresh().await;
            output::spinner_success(&pb, "Balances read");
        }
        Action::SwitchToken => {
            let next = dashboard.transaction().token().other();
            if let Err(rejection) = dashboard.select_token(next) {
                output::warning(&rejection.to_string());
            }
        }
        Action::Approve(token) => {
            let pb = output::spinner(&format!("Approving {token}..."));
            if dashboard.approve(token).await.is_failed() {
                output::spinner_fail(&pb, "Approval failed");
            } else {
                output::spinner_success(&pb, "Approval finished");
            }
        }
        Action::Submit(direction) => submit(dashboard, direction).await?,
        Action::Connect => {
            let pb = output::spinner("Connecting...");
            dashboard.connect(&runtime.wallet).await;
            output::spinner_success(&pb, "Connected");
        }
        Action::Disconnect => dashboard.disconnect(),
        Action::Quit => {}
    }
    Ok(())
}

async fn submit(dashboard: &mut Dashboard, direction: Direction) -> Result<()> {
    if !dashboard.session().can_sign() {
        output::warning("connect a signing wallet first");
        return Ok(());
    }

    let current = dashboard.transaction().input(direction).as_str().to_string();
    let text: String = Input::new()
        .with_prompt(format!(
            "{} amount ({})",
            direction.label(),
            dashboard.transaction().token()
        ))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    dashboard.set_amount(direction, text);

    let pb = output::spinner(&format!("Submitting {direction}..."));
    match dashboard.submit(direction).await {
        Ok(status) if status.is_failed() => output::spinner_fail(&pb, "Transaction failed"),
        Ok(_) => output::spinner_success(&pb, "Transaction submitted"),
        Err(rejection) => {
            pb.finish_and_clear();
            output::warning(&rejection.to_string());
        }
    }
    Ok(())
}

//! Handlers for the `deposit` and `withdraw` commands.

use crate::adapter::inbound::cli::command::TransactArgs;
use crate::adapter::inbound::cli::{output, prompt, render};
use crate::domain::{format_units, Direction};
use crate::error::{ExecutionError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Submit a deposit or withdraw of `args.amount` of the selected token.
///
/// The amount and signer are checked before any RPC call. Balances are
/// read and printed only when the submission succeeds.
pub async fn execute(config: &Config, direction: Direction, args: &TransactArgs) -> Result<()> {
    let mut runtime = bootstrap::build(config, None)?;
    let dashboard = &mut runtime.dashboard;

    dashboard
        .select_token(args.token)
        .map_err(ExecutionError::from)?;
    dashboard.set_amount(direction, args.amount.as_str());
    let amount = dashboard
        .transaction()
        .check(dashboard.session(), direction)
        .map_err(ExecutionError::from)?;

    output::section(direction.label());
    output::field("Token", args.token);
    output::field("Amount", format_units(amount));
    render::session(dashboard.session());

    let prompt_text = format!(
        "{} {} {}?",
        direction.label(),
        format_units(amount),
        args.token
    );
    if !prompt::confirm(&prompt_text, args.yes)? {
        return Ok(());
    }

    let pb = output::spinner(&format!("Submitting {direction}..."));
    let status = dashboard
        .submit(direction)
        .await
        .map_err(ExecutionError::from)?
        .clone();
    let text = dashboard.transaction().status_text();

    if status.is_failed() {
        output::spinner_fail(&pb, "Transaction failed");
        return Err(ExecutionError::Failed(text.unwrap_or_default()).into());
    }
    output::spinner_success(&pb, "Transaction submitted");

    render::operation(&status, text, &config.network.explorer_url);
    render::balances(dashboard);
    Ok(())
}

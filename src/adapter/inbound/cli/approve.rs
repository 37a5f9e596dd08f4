//! Handler for the `approve` command.

use crate::adapter::inbound::cli::command::ApproveArgs;
use crate::adapter::inbound::cli::{output, prompt, render};
use crate::domain::format_units;
use crate::error::{ExecutionError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;
use crate::port::{ContractGateway, WalletSession};

/// Approve the pool to spend the selected token.
pub async fn execute(config: &Config, args: &ApproveArgs) -> Result<()> {
    let mut runtime = bootstrap::build(config, None)?;
    let token = args.token;
    let amount = runtime.dashboard.approval_amount();

    output::section("Token Approval");
    output::field("Token", token);
    output::field("Spender", runtime.gateway.pool_address());
    output::field("Amount", format_units(amount));
    render::session(runtime.dashboard.session());

    if runtime.wallet.can_sign()
        && !prompt::confirm(&format!("Approve {token} for the pool?"), args.yes)?
    {
        return Ok(());
    }

    let pb = output::spinner(&format!("Approving {token}..."));
    let status = runtime.dashboard.approve(token).await.clone();
    if status.is_failed() {
        output::spinner_fail(&pb, "Approval failed");
    } else {
        output::spinner_success(&pb, "Approval submitted");
    }

    let text = runtime.dashboard.approval(token).status_text();
    if status.is_failed() {
        return Err(ExecutionError::Failed(text.unwrap_or_default()).into());
    }
    render::operation(&status, text, &config.network.explorer_url);
    Ok(())
}

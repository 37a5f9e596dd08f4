//! Rendering of dashboard state shared by the one-shot commands and the
//! interactive console.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::Dashboard;
use crate::domain::{format_units, BalanceSnapshot, OperationStatus, TokenSelector};
use crate::port::SessionState;

/// Print who is connected and whether writes are possible.
pub fn session(session: &SessionState) {
    match session.account {
        Some(account) => {
            output::field("Account", output::highlight(account));
            if !session.can_sign {
                output::note("Watch-only session, writes are disabled");
            }
        }
        None => {
            output::field("Account", output::muted("not connected"));
            output::hint("set WALLET_PRIVATE_KEY or pass --address to read balances");
        }
    }
}

fn snapshot(title: &str, snapshot: &BalanceSnapshot) {
    output::section(title);
    for token in TokenSelector::ALL {
        output::field(token.label(), snapshot.get(token));
    }
}

/// Print pool and wallet balances; `-` marks a balance that is unknown.
pub fn balances(dashboard: &Dashboard) {
    if output::is_json() {
        output::json_output(
            "balances",
            json!({
                "account": dashboard.session().account,
                "deposited": dashboard.balances(),
                "wallet": dashboard.wallet_balances(),
            }),
        );
        return;
    }

    snapshot("Deposited", dashboard.balances());
    snapshot("Wallet", dashboard.wallet_balances());
}

/// Print one flow's status line, with an explorer link once submitted.
pub fn operation(status: &OperationStatus, text: Option<String>, explorer: &str) {
    let Some(text) = text else {
        return;
    };

    match status {
        OperationStatus::Idle => {}
        OperationStatus::Pending => output::note(&text),
        OperationStatus::Succeeded(tx) => {
            output::success(&text);
            output::field("Transaction", tx);
            output::field("Explorer", output::highlight(tx.explorer_url(explorer)));
        }
        OperationStatus::Failed(_) => output::error(&text),
    }
}

/// Print the whole dashboard: session, balances, then any status lines.
pub fn dashboard(dashboard: &Dashboard, explorer: &str) {
    output::section("Session");
    session(dashboard.session());
    output::field("Selected", dashboard.transaction().token());
    output::field(
        "Allowance",
        format!("{} per approval", format_units(dashboard.approval_amount())),
    );
    balances(dashboard);

    let approvals = TokenSelector::ALL.map(|token| dashboard.approval(token));
    let transaction = dashboard.transaction();
    let has_status = approvals
        .iter()
        .any(|flow| !matches!(flow.status(), OperationStatus::Idle))
        || !matches!(transaction.status(), OperationStatus::Idle);
    if !has_status {
        return;
    }

    output::section("Status");
    for flow in approvals {
        operation(flow.status(), flow.status_text(), explorer);
    }
    operation(transaction.status(), transaction.status_text(), explorer);
}

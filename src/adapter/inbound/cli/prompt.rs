//! Interactive confirmation for commands that send transactions.

use dialoguer::Confirm;

use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Ask before sending a transaction unless `--yes` was passed.
///
/// JSON mode never prompts; scripts must pass `--yes`.
pub fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if output::is_json() {
        output::warning("confirmation required, pass --yes in JSON mode");
        return Ok(false);
    }

    let accepted = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !accepted {
        output::warning("Cancelled by user");
    }
    Ok(accepted)
}

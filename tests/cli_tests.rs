//! CLI integration tests.
//!
//! Every command runs from a scratch directory with wallet variables
//! cleared, and network-bound commands point at a closed local port so
//! reads and writes fail fast.

use std::io::ErrorKind;
use std::net::TcpListener;
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

const OFFLINE_CONFIG: &str = r#"
[network]
rpc_url = "http://127.0.0.1:1"
"#;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("offline.toml"), OFFLINE_CONFIG).expect("write config");
        Self { dir }
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("write file");
    }

    fn hooktuah(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hooktuah");
        cmd.current_dir(self.dir.path())
            .env_remove("WALLET_PRIVATE_KEY")
            .env_remove("HOOKTUAH_KEYSTORE_PASSWORD")
            .env_remove("HOOKTUAH_KEYSTORE_PASSWORD_FILE")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    fn offline(&self) -> Command {
        let mut cmd = self.hooktuah();
        cmd.args(["--config", "offline.toml"]);
        cmd
    }
}

#[test]
fn test_help_lists_commands() {
    Sandbox::new()
        .hooktuah()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balances"))
        .stdout(predicate::str::contains("approve"))
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("withdraw"))
        .stdout(predicate::str::contains("console"));
}

#[test]
fn test_version() {
    Sandbox::new()
        .hooktuah()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hooktuah"));
}

#[test]
fn test_config_validate_defaults() {
    Sandbox::new()
        .hooktuah()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("No signing key"));
}

#[test]
fn test_config_validate_rejects_bad_address() {
    let sandbox = Sandbox::new();
    sandbox.write("bad.toml", "[contracts]\ntoken0 = \"not-an-address\"\n");

    sandbox
        .hooktuah()
        .args(["config", "validate", "--config", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for token0"));
}

#[test]
fn test_config_show_json() {
    Sandbox::new()
        .hooktuah()
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"field""#))
        .stdout(predicate::str::contains("84532"))
        .stdout(
            predicate::str::is_match("(?i)0xe73c81b5386aa1e90a74a1cbf8c9c6bb45461540")
                .expect("valid regex"),
        );
}

#[test]
fn test_config_init_writes_template() {
    let sandbox = Sandbox::new();

    sandbox
        .hooktuah()
        .args(["config", "init", "generated.toml"])
        .assert()
        .success();
    sandbox
        .hooktuah()
        .args(["config", "validate", "--config", "generated.toml"])
        .assert()
        .success();
    sandbox
        .hooktuah()
        .args(["config", "init", "generated.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_wallet_address_from_env() {
    Sandbox::new()
        .hooktuah()
        .env("WALLET_PRIVATE_KEY", DEV_KEY)
        .args(["wallet", "address"])
        .assert()
        .success()
        .stdout(predicate::str::contains(DEV_ADDRESS));
}

#[test]
fn test_wallet_address_without_key_fails() {
    Sandbox::new()
        .hooktuah()
        .args(["wallet", "address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WALLET_PRIVATE_KEY"));
}

#[test]
fn test_keystore_requires_password() {
    let sandbox = Sandbox::new();
    sandbox.write("keystore.toml", "[wallet]\nkeystore_path = \"missing.json\"\n");

    sandbox
        .hooktuah()
        .args(["config", "validate", "--config", "keystore.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HOOKTUAH_KEYSTORE_PASSWORD"));
}

#[test]
fn test_approve_without_wallet_asks_to_connect() {
    Sandbox::new()
        .offline()
        .args(["approve", "token0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("connect wallet first"));
}

#[test]
fn test_deposit_without_wallet_is_refused() {
    Sandbox::new()
        .offline()
        .args(["deposit", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no signing wallet available"));
}

#[test]
fn test_deposit_rejects_non_numeric_amount() {
    Sandbox::new()
        .offline()
        .env("WALLET_PRIVATE_KEY", DEV_KEY)
        .args(["deposit", "abc", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'abc' is not a decimal number"));
}

#[test]
fn test_invalid_amount_is_refused_before_any_rpc() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    listener.set_nonblocking(true).expect("nonblocking");
    let port = listener.local_addr().expect("local addr").port();

    let sandbox = Sandbox::new();
    sandbox.write(
        "silent.toml",
        &format!("[network]\nrpc_url = \"http://127.0.0.1:{port}\"\n"),
    );

    for amount in ["", "abc"] {
        sandbox
            .hooktuah()
            .timeout(Duration::from_secs(30))
            .env("WALLET_PRIVATE_KEY", DEV_KEY)
            .args(["--config", "silent.toml", "deposit", amount, "--yes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("submission refused"));
    }

    match listener.accept() {
        Err(e) if e.kind() == ErrorKind::WouldBlock => {}
        Err(e) => panic!("unexpected accept error: {e}"),
        Ok((_, peer)) => panic!("command opened an RPC connection from {peer}"),
    }
}

#[test]
fn test_withdraw_reports_submission_failure() {
    Sandbox::new()
        .offline()
        .env("WALLET_PRIVATE_KEY", DEV_KEY)
        .args(["withdraw", "1", "--token", "token1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Withdraw failed:"));
}

#[test]
fn test_json_deposit_without_yes_does_not_submit() {
    Sandbox::new()
        .offline()
        .env("WALLET_PRIVATE_KEY", DEV_KEY)
        .args(["--json", "deposit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass --yes"));
}

#[test]
fn test_watched_balances_unknown_when_offline() {
    Sandbox::new()
        .offline()
        .args(["--json", "balances", "--address", DEV_ADDRESS])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"balances""#))
        .stdout(predicate::str::contains(r#""token0":null"#));
}

#[test]
fn test_balances_without_wallet_shows_placeholders() {
    Sandbox::new()
        .offline()
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("not connected"))
        .stdout(predicate::str::contains("Token0       -"));
}

#[test]
fn test_console_refuses_json() {
    Sandbox::new()
        .offline()
        .args(["--json", "console"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support --json"));
}

#[test]
fn test_check_connection_fails_offline() {
    Sandbox::new()
        .offline()
        .args(["check", "connection"])
        .assert()
        .failure();
}

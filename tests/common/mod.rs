#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use spendsphere_core::domain::{CategoryEntry, Period};

pub fn september() -> Period {
    Period::new(9).expect("valid month")
}

pub fn spend(name: &str, amount: f64, operations: &[(&str, f64)]) -> CategoryEntry {
    operations.iter().fold(
        CategoryEntry::new(name, "wallet-outline", "#36A2EB").with_spend(amount),
        |entry, (op, value)| entry.with_operation(*op, *value),
    )
}

pub fn income(name: &str, amount: f64) -> CategoryEntry {
    CategoryEntry::new(name, "cash-outline", "#EE0ADF").with_income(amount)
}

/// Shell binary in script mode with its data directory under `home`.
pub fn script_cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendsphere_cli").expect("binary built");
    cmd.env("SPENDSPHERE_CLI_SCRIPT", "1")
        .env("SPENDSPHERE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

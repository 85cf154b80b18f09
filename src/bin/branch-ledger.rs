use std::fs::File;

use anyhow::{Context, Result};
use branch_ledger::{
    bank::{Bank, BankConfig},
    bin_utils::Service,
    processor::ProcessError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a script file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let bank = Bank::new(BankConfig::default());
    let service = Service {
        bank: &bank,
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            ProcessError::CommandErr(err) => eprintln!("Error at line {line}: {err}"),
            ProcessError::BankErr(err) => eprintln!("Rejected at line {line}: {err}"),
        }),
    };
    service.run()
}

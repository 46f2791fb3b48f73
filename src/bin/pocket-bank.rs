use std::fs::File;

use anyhow::{Context, Result};
use pocket_bank::bin_utils::Service;

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                pocket_bank::processor::OperationProcessError::OperationErr(err) => {
                    eprintln!("Error at line {line}: {err}")
                }
                pocket_bank::processor::OperationProcessError::BankErr(
                    err @ pocket_bank::bank::BankError::UnknownAccount(_),
                ) => {
                    eprintln!("Error at line {line}: {err}")
                }
                pocket_bank::processor::OperationProcessError::BankErr(_)
                | pocket_bank::processor::OperationProcessError::AccountErr(_) => {
                    // these are not technical errors, so we don't need to print them
                }
            }
        }),
    };
    service.run()
}

//! This module could be a separate crate on its own, to bootstrap [`pocket_bank`] within binary
//! but for simplicitly purposes, I include this module directly in binary.

use std::io::{Read, Write};

use crate::processor::{
    OperationProcessError, OperationProcessor, in_memory_processor::InMemoryOperationProcessor,
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{BalanceRow, print_balances};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut processor = InMemoryOperationProcessor::default();

        for (line, row) in parser {
            if let Err(err) =
                processor.process_operation(row.op, row.account, row.to, row.amount)
            {
                (self.error_printer)(line, err);
            }
        }

        print_balances(
            self.output,
            processor.bank.accounts().iter().map(|acc| BalanceRow {
                owner: acc.owner().to_owned(),
                balance: acc.balance(),
            }),
        )
    }
}

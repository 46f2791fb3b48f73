use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountError,
    bank::BankError,
    operation::{OperationError, OperationKind},
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum OperationProcessError {
    #[error(transparent)]
    OperationErr(#[from] OperationError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    BankErr(#[from] BankError),
}

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        account: String,
        to: Option<String>,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError>;
}

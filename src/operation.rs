use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Amount must not be negative for {kind:?}")]
    NegativeAmount { kind: OperationKind },
    #[error("Destination account is required for a transfer")]
    DestinationRequired,
    #[error("No account is held for owner `{owner}`")]
    UnknownOwner { owner: String },
    #[error("An account for owner `{owner}` is already open")]
    OwnerTaken { owner: String },
}

#[derive(Debug, Clone)]
pub enum BankOperation {
    Open {
        owner: String,
        initial_balance: Decimal,
    },
    Deposit {
        owner: String,
        amount: Decimal,
    },
    Withdraw {
        owner: String,
        amount: Decimal,
    },
    Transfer {
        source: String,
        destination: String,
        amount: Decimal,
    },
}

impl BankOperation {
    pub fn parse(
        kind: OperationKind,
        account: String,
        to: Option<String>,
        amount: Option<Decimal>,
    ) -> Result<Self, OperationError> {
        let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
        match kind {
            // a negative opening balance is passed through untouched,
            // only debit enforces the zero floor
            OperationKind::Open => Ok(Self::Open {
                owner: account,
                initial_balance: amount,
            }),
            OperationKind::Deposit => {
                Self::require_non_negative(kind, amount)?;
                Ok(Self::Deposit {
                    owner: account,
                    amount,
                })
            }
            OperationKind::Withdraw => {
                Self::require_non_negative(kind, amount)?;
                Ok(Self::Withdraw {
                    owner: account,
                    amount,
                })
            }
            OperationKind::Transfer => {
                Self::require_non_negative(kind, amount)?;
                let destination = to.ok_or(OperationError::DestinationRequired)?;
                Ok(Self::Transfer {
                    source: account,
                    destination,
                    amount,
                })
            }
        }
    }

    fn require_non_negative(kind: OperationKind, amount: Decimal) -> Result<(), OperationError> {
        if amount < Decimal::zero() {
            Err(OperationError::NegativeAmount { kind })
        } else {
            Ok(())
        }
    }
}

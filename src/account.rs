use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::bank::BankId;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// An account held by a single owner, with an exact decimal balance.
///
/// The balance is only ever changed through [`Account::debit`] and
/// [`Account::credit`], and never drops below zero: a debit that would
/// make it negative is rejected and leaves the balance untouched.
#[derive(Debug, Clone)]
pub struct Account {
    owner: String,
    balance: Decimal,
    bank: Option<BankId>,
}

impl Account {
    /// The initial balance is taken as-is; a negative opening balance is
    /// allowed, only [`Account::debit`] enforces the zero floor.
    pub fn new(owner: String, initial_balance: Decimal) -> Self {
        Self {
            owner,
            balance: initial_balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Id of the bank this account was added to, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn attach(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let new_balance = self.balance - amount;
        if new_balance < Decimal::zero() {
            return Err(AccountError::InsufficientFunds);
        }
        self.balance = new_balance;
        Ok(())
    }

    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}

/// Two accounts are the same value when owner and balance match; the
/// bank association is not part of account identity.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

use rust_decimal::Decimal;

use crate::{
    account::Account,
    bank::{AccountId, Bank, BankError},
    operation::{BankOperation, OperationError, OperationKind},
};

use super::{OperationProcessError, OperationProcessor};

#[derive(Debug, Default)]
pub struct InMemoryOperationProcessor {
    pub bank: Bank,
}

impl OperationProcessor for InMemoryOperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        account: String,
        to: Option<String>,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError> {
        match BankOperation::parse(kind, account, to, amount)? {
            BankOperation::Open {
                owner,
                initial_balance,
            } => {
                // the owner name is the addressing key for every later
                // operation, so it must be unique within the bank
                if self.bank.find_account(&owner).is_some() {
                    return Err(OperationError::OwnerTaken { owner }.into());
                }
                tracing::debug!(%owner, %initial_balance, "account opened");
                self.bank.add_account(Account::new(owner, initial_balance));
            }
            BankOperation::Deposit { owner, amount } => {
                let id = self.lookup(&owner)?;
                self.account_mut(id)?.credit(amount);
            }
            BankOperation::Withdraw { owner, amount } => {
                let id = self.lookup(&owner)?;
                self.account_mut(id)?.debit(amount)?;
            }
            BankOperation::Transfer {
                source,
                destination,
                amount,
            } => {
                let source = self.lookup(&source)?;
                let destination = self.lookup(&destination)?;
                self.bank.transfer(source, destination, amount)?;
            }
        }
        Ok(())
    }
}

impl InMemoryOperationProcessor {
    fn lookup(&self, owner: &str) -> Result<AccountId, OperationError> {
        self.bank
            .find_account(owner)
            .ok_or_else(|| OperationError::UnknownOwner {
                owner: owner.to_owned(),
            })
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, BankError> {
        self.bank
            .account_mut(id)
            .ok_or(BankError::UnknownAccount(id))
    }
}

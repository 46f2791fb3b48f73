use std::sync::atomic::{AtomicU32, Ordering};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError};

pub type BankId = u32;

/// Position of an account inside its bank.
pub type AccountId = usize;

#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Unknown account id {0}")]
    UnknownAccount(AccountId),
}

// Bank ids are drawn from a process-wide counter, so an account's
// back-reference stays meaningful when several banks exist.
static NEXT_BANK_ID: AtomicU32 = AtomicU32::new(0);

/// A bank holding zero or more accounts. Accounts are addressed by the
/// [`AccountId`] returned from [`Bank::add_account`].
#[derive(Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            id: NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed),
            name: String::new(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Takes ownership of the account, stamps its back-reference and
    /// appends it. Membership is not deduplicated, adding an equal
    /// account twice yields two entries.
    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        account.attach(self.id);
        self.accounts.push(account);
        self.accounts.len() - 1
    }

    /// Read view over the held accounts, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Id of the first account whose owner matches.
    pub fn find_account(&self, owner: &str) -> Option<AccountId> {
        self.accounts.iter().position(|acc| acc.owner() == owner)
    }

    /// Moves `amount` from `source` to `destination` as one step: either
    /// both balances change or neither does. The destination is resolved
    /// before the debit, so an unknown id cannot leave the source
    /// already debited.
    pub fn transfer(
        &mut self,
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Result<(), BankError> {
        if destination >= self.accounts.len() {
            return Err(BankError::UnknownAccount(destination));
        }
        let src = self
            .accounts
            .get_mut(source)
            .ok_or(BankError::UnknownAccount(source))?;
        src.debit(amount)?;
        self.accounts[destination].credit(amount);
        tracing::debug!(source, destination, %amount, "transfer applied");
        Ok(())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn new_bank_is_empty_and_unnamed() {
        let bank = Bank::new();
        assert!(bank.accounts().is_empty());
        assert!(bank.name().is_empty());
    }

    #[test]
    fn banks_get_distinct_ids() {
        assert_ne!(Bank::new().id(), Bank::new().id());
    }

    #[test]
    fn set_name() {
        let mut bank = Bank::new();
        bank.set_name("State Bank".to_owned());
        assert_eq!(bank.name(), "State Bank");
    }

    #[test]
    fn add_account_stamps_back_reference() {
        let acc = Account::new("Andres".to_owned(), dec("1500.8989"));
        assert_eq!(acc.bank(), None);

        let mut bank = Bank::new();
        let id = bank.add_account(acc);
        assert_eq!(bank.account(id).unwrap().bank(), Some(bank.id()));
    }

    #[test]
    fn duplicate_accounts_are_kept() {
        let acc = Account::new("Andres".to_owned(), dec("100"));
        let mut bank = Bank::new();
        bank.add_account(acc.clone());
        bank.add_account(acc);
        assert_eq!(bank.accounts().len(), 2);
    }

    #[test]
    fn transfer_moves_funds() {
        let mut bank = Bank::new();
        let source = bank.add_account(Account::new("Andres".to_owned(), dec("1500.8989")));
        let destination = bank.add_account(Account::new("John Doe".to_owned(), dec("2500")));

        bank.transfer(source, destination, dec("500")).unwrap();
        assert_eq!(bank.account(source).unwrap().balance().to_string(), "1000.8989");
        assert_eq!(bank.account(destination).unwrap().balance().to_string(), "3000");
    }

    #[test]
    fn failed_transfer_changes_neither_balance() {
        let mut bank = Bank::new();
        let source = bank.add_account(Account::new("Andres".to_owned(), dec("100")));
        let destination = bank.add_account(Account::new("John Doe".to_owned(), dec("2500")));

        let err = bank.transfer(source, destination, dec("100.01")).unwrap_err();
        assert!(matches!(err, BankError::Account(AccountError::InsufficientFunds)));
        assert_eq!(bank.account(source).unwrap().balance(), dec("100"));
        assert_eq!(bank.account(destination).unwrap().balance(), dec("2500"));
    }

    #[test]
    fn transfer_to_unknown_account_leaves_source_untouched() {
        let mut bank = Bank::new();
        let source = bank.add_account(Account::new("Andres".to_owned(), dec("100")));

        let err = bank.transfer(source, 7, dec("50")).unwrap_err();
        assert!(matches!(err, BankError::UnknownAccount(7)));
        assert_eq!(bank.account(source).unwrap().balance(), dec("100"));

        let err = bank.transfer(9, source, dec("50")).unwrap_err();
        assert!(matches!(err, BankError::UnknownAccount(9)));
        assert_eq!(bank.account(source).unwrap().balance(), dec("100"));
    }

    #[test]
    fn accounts_are_found_by_owner_after_transfer() {
        let mut bank = Bank::new();
        bank.set_name("State Bank".to_owned());
        let source = bank.add_account(Account::new("Andres".to_owned(), dec("1500.8989")));
        let destination = bank.add_account(Account::new("John Doe".to_owned(), dec("2500")));
        bank.transfer(source, destination, dec("500")).unwrap();

        assert_eq!(bank.accounts().len(), 2);
        let found = bank.find_account("Andres").unwrap();
        assert_eq!(found, source);
        assert_eq!(bank.account(found).unwrap().owner(), "Andres");
        assert!(bank.find_account("Jane Roe").is_none());
    }

    #[test]
    fn held_account_compares_equal_to_a_standalone_one() {
        // the back-reference set by add_account is excluded from equality
        let acc = Account::new("Andres".to_owned(), dec("100"));
        let mut bank = Bank::new();
        let id = bank.add_account(acc.clone());
        assert_eq!(*bank.account(id).unwrap(), acc);
    }
}

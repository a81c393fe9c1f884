//! A client and the accounts it owns.

use tracing::info;

use crate::Amount;
use crate::account::{Account, AccountError};
use crate::ids::IdAllocator;
use crate::model::AccountId;

/// A client owning zero or more accounts, in opening order.
#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open an empty account with an identifier from `ids`.
    pub fn open_account(&mut self, ids: &mut dyn IdAllocator) -> &mut Account {
        let account = Account::open(self.name.clone()).identified(ids.next_id());
        self.push(account)
    }

    /// Open an account holding `initial_balance`.
    ///
    /// A negative balance is rejected before an identifier is drawn.
    pub fn open_account_with_balance(
        &mut self,
        ids: &mut dyn IdAllocator,
        initial_balance: Amount,
    ) -> Result<&mut Account, AccountError> {
        let account = Account::new(self.name.clone(), initial_balance)?;
        Ok(self.push(account.identified(ids.next_id())))
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == Some(id))
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id() == Some(id))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Consolidated balance over all accounts.
    pub fn total_balance(&self) -> Amount {
        self.accounts.iter().map(Account::balance).sum()
    }

    fn push(&mut self, account: Account) -> &mut Account {
        info!(
            client = %self.name,
            account = ?account.id(),
            balance = %account.balance(),
            "account opened"
        );
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }
}

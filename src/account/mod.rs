//! Bank accounts.
//!
//! An [`Account`] holds a balance and an append-only history of the
//! operations attempted on it. The balance has no setter: it only moves
//! through [`Account::deposit`] and [`Account::withdraw`].
//! [`SavingsAccount`] wraps an account and adds interest accrual.

use std::fmt;

use tracing::{info, warn};

use crate::Amount;
use crate::model::{AccountId, OperationKind, OperationRecord, OperationStatus};

mod error;
pub use error::{AccountError, InvalidArgument};

mod savings;
pub use savings::SavingsAccount;

/// A bank account with its balance and operation history.
#[derive(Debug, Clone)]
pub struct Account {
    id: Option<AccountId>,
    owner: String,
    balance: Amount,
    history: Vec<OperationRecord>,
}

/// Public API
impl Account {
    /// Open an account with a zero balance.
    pub fn open(owner: impl Into<String>) -> Self {
        Self {
            id: None,
            owner: owner.into(),
            balance: Amount::ZERO,
            history: Vec::new(),
        }
    }

    /// Open an account with an initial balance, which must not be negative.
    pub fn new(owner: impl Into<String>, initial_balance: Amount) -> Result<Self, AccountError> {
        if initial_balance.is_negative() {
            return Err(InvalidArgument::NegativeInitialBalance(initial_balance).into());
        }
        let mut account = Self::open(owner);
        account.balance = initial_balance;
        Ok(account)
    }

    /// Like [`Account::new`], with an identifier attached.
    pub fn with_id(
        id: AccountId,
        owner: impl Into<String>,
        initial_balance: Amount,
    ) -> Result<Self, AccountError> {
        Ok(Self::new(owner, initial_balance)?.identified(id))
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Recorded operations, oldest first.
    pub fn history(&self) -> &[OperationRecord] {
        &self.history
    }

    /// Credit `amount`, which must be positive.
    ///
    /// A rejected amount leaves both balance and history untouched.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let result = self.apply_deposit(amount);
        self.log_result("deposit", amount, &result);
        result
    }

    /// Debit `amount`, which must be positive.
    ///
    /// A withdrawal larger than the balance fails but is still recorded
    /// with [`OperationStatus::FailedInsufficientFunds`].
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        let result = self.apply_withdrawal(amount);
        self.log_result("withdrawal", amount, &result);
        result
    }
}

/// Private API
impl Account {
    fn apply_deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow {
                balance: self.balance,
                amount,
            })?;
        self.record(OperationKind::Deposit, amount, OperationStatus::Ok);

        Ok(())
    }

    fn apply_withdrawal(&mut self, amount: Amount) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        if amount > self.balance {
            self.record(
                OperationKind::Withdrawal,
                amount,
                OperationStatus::FailedInsufficientFunds,
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        self.record(OperationKind::Withdrawal, amount, OperationStatus::Ok);

        Ok(())
    }

    pub(crate) fn identified(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn record(&mut self, kind: OperationKind, amount: Amount, status: OperationStatus) {
        self.history.push(OperationRecord::now(kind, amount, status));
    }

    fn log_result(&self, op: &str, amount: Amount, result: &Result<(), AccountError>) {
        match result {
            Ok(()) => {
                info!(
                    account = ?self.id,
                    owner = %self.owner,
                    amount = %amount,
                    balance = %self.balance,
                    "{op} applied"
                );
            }
            Err(e @ (AccountError::InsufficientFunds { .. } | AccountError::Overflow { .. })) => {
                warn!(
                    account = ?self.id,
                    owner = %self.owner,
                    amount = %amount,
                    reason = %e,
                    "{op} rejected"
                );
            }
            Err(e) => {
                info!(
                    account = ?self.id,
                    owner = %self.owner,
                    amount = %amount,
                    reason = %e,
                    "{op} rejected"
                );
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner: {}, Balance: {}", self.owner, self.balance)
    }
}

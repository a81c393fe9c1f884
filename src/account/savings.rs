use std::fmt;

use tracing::info;

use super::{Account, AccountError};
use crate::model::{AccountId, OperationKind, OperationRecord, OperationStatus};
use crate::{Amount, Rate};

/// An account that accrues interest at a fixed annual rate.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    account: Account,
    annual_rate: Rate,
}

impl SavingsAccount {
    pub const DEFAULT_RATE: f64 = 0.03;

    /// Savings account at [`SavingsAccount::DEFAULT_RATE`].
    pub fn open(owner: impl Into<String>, initial_balance: Amount) -> Result<Self, AccountError> {
        Self::new(owner, initial_balance, Self::DEFAULT_RATE)
    }

    pub fn new(
        owner: impl Into<String>,
        initial_balance: Amount,
        annual_rate: f64,
    ) -> Result<Self, AccountError> {
        let annual_rate = Rate::from_float(annual_rate)?;
        let account = Account::new(owner, initial_balance)?;
        Ok(Self {
            account,
            annual_rate,
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn id(&self) -> Option<AccountId> {
        self.account.id()
    }

    pub fn owner(&self) -> &str {
        self.account.owner()
    }

    pub fn balance(&self) -> Amount {
        self.account.balance()
    }

    pub fn history(&self) -> &[OperationRecord] {
        self.account.history()
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.account.withdraw(amount)
    }

    /// Credit one year of interest on the current balance and return it.
    ///
    /// The credit goes through [`Account::deposit`], which records a
    /// DEPOSIT; an INTEREST record for the same amount follows it. A zero
    /// interest (zero rate or zero balance) fails with
    /// [`AccountError::InvalidAmount`] and records nothing.
    pub fn accrue_interest(&mut self) -> Result<Amount, AccountError> {
        let balance = self.account.balance();
        let interest = balance
            .apply_rate(self.annual_rate)
            .ok_or(AccountError::Overflow {
                balance,
                amount: balance,
            })?;

        self.account.deposit(interest)?;
        self.account.record(OperationKind::Interest, interest, OperationStatus::Ok);

        info!(
            owner = %self.account.owner(),
            rate = %self.annual_rate,
            interest = %interest,
            "interest accrued"
        );

        Ok(interest)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Rate: {})", self.account, self.annual_rate)
    }
}

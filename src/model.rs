//! Core domain types shared by accounts, clients and the replay driver.

use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::Amount;

/// Account identifier.
pub type AccountId = u32;

/// Client name, the key clients are looked up by.
pub type ClientName = String;

/// Format used for record timestamps (ISO-8601, whole seconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Kind of balance-affecting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    /// Interest credited to a savings account.
    Interest,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "DEPOSIT",
            OperationKind::Withdrawal => "WITHDRAWAL",
            OperationKind::Interest => "INTEREST",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome of a recorded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OperationStatus {
    #[default]
    Ok,
    /// Withdrawal refused because it exceeded the balance.
    FailedInsufficientFunds,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Ok => "OK",
            OperationStatus::FailedInsufficientFunds => "FAILED_INSUFFICIENT_FUNDS",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, OperationStatus::Ok)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable history entry for one attempted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    kind: OperationKind,
    amount: Amount,
    status: OperationStatus,
    timestamp: NaiveDateTime,
}

impl OperationRecord {
    /// Create a record stamped with the current local time.
    pub(crate) fn now(kind: OperationKind, amount: Amount, status: OperationStatus) -> Self {
        Self::at(kind, amount, status, Local::now().naive_local())
    }

    pub(crate) fn at(
        kind: OperationKind,
        amount: Amount,
        status: OperationStatus,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            amount,
            status,
            timestamp: timestamp.trunc_subsecs(0),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp as `YYYY-MM-DDTHH:MM:SS`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// An input of the replay driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Open a new account for a client, creating the client if unknown.
    Open { client: ClientName, initial: Amount },
    /// Credit funds to one of the client's accounts.
    Deposit {
        client: ClientName,
        account: AccountId,
        amount: Amount,
    },
    /// Debit funds from one of the client's accounts.
    Withdrawal {
        client: ClientName,
        account: AccountId,
        amount: Amount,
    },
}

impl Operation {
    pub fn client(&self) -> &str {
        match self {
            Operation::Open { client, .. }
            | Operation::Deposit { client, .. }
            | Operation::Withdrawal { client, .. } => client,
        }
    }
}

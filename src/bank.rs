//! Replay driver.
//!
//! A [`Bank`] keeps clients by name and applies [`Operation`]s to their
//! accounts. Identifiers for every opened account come from one shared
//! [`Sequence`]. Also supports an async stream of operations.

use std::collections::HashMap;

use thiserror::Error;
use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::account::{Account, AccountError};
use crate::client::Client;
use crate::ids::Sequence;
use crate::model::{AccountId, ClientName, Operation};

/// Error returned by [`Bank::apply`].
#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("{0}")]
    Account(#[from] AccountError),

    #[error("client '{0}' not found")]
    ClientNotFound(ClientName),

    #[error("account {1} not found for client '{0}'")]
    AccountNotFound(ClientName, AccountId),
}

pub struct Bank {
    clients: HashMap<ClientName, Client>,
    /// Client names in the order they were first seen
    order: Vec<ClientName>,
    ids: Sequence,
}

/// Public API
impl Bank {
    pub fn new() -> Self {
        Self::with_ids(Sequence::default())
    }

    pub fn with_ids(ids: Sequence) -> Self {
        Self {
            clients: HashMap::new(),
            order: Vec::new(),
            ids,
        }
    }

    /// Run the bank with the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // a rejected operation should not stop the replay
            let _ = self.apply(op);
        }
    }

    /// Clients in first-seen order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> + '_ {
        self.order.iter().filter_map(|name| self.clients.get(name))
    }

    pub fn get_client(&self, name: &str) -> Option<&Client> {
        self.clients.get(name)
    }

    /// Apply a single operation on top of the current state
    pub fn apply(&mut self, op: Operation) -> Result<(), BankError> {
        match op {
            Operation::Open { client, initial } => {
                let result = self.apply_open(&client, initial);
                let opened = result.as_ref().ok().copied().flatten();
                Self::log_result(
                    "open",
                    &client,
                    opened,
                    initial,
                    result.as_ref().map(|_| ()),
                );
                result?;
            }
            Operation::Deposit {
                client,
                account,
                amount,
            } => {
                let result = self
                    .find_account(&client, account)
                    .and_then(|acc| acc.deposit(amount).map_err(BankError::from));
                Self::log_result(
                    "deposit",
                    &client,
                    Some(account),
                    amount,
                    result.as_ref().copied(),
                );
                result?;
            }
            Operation::Withdrawal {
                client,
                account,
                amount,
            } => {
                let result = self
                    .find_account(&client, account)
                    .and_then(|acc| acc.withdraw(amount).map_err(BankError::from));
                Self::log_result(
                    "withdrawal",
                    &client,
                    Some(account),
                    amount,
                    result.as_ref().copied(),
                );
                result?;
            }
        }
        Ok(())
    }
}

/// Private API
impl Bank {
    /// Small helper to log `apply` results
    fn log_result(
        op: &str,
        client: &str,
        account: Option<AccountId>,
        amount: Amount,
        result: Result<(), &BankError>,
    ) {
        match result {
            Ok(()) => {
                info!(client, account = ?account, amount = %amount, "{op} applied");
            }
            Err(e) => {
                info!(client, account = ?account, amount = %amount, reason = %e, "{op} skipped");
            }
        }
    }

    /// Open an account, creating the client if unknown.
    ///
    /// A new client is only registered once its first account is open.
    fn apply_open(
        &mut self,
        client: &str,
        initial: Amount,
    ) -> Result<Option<AccountId>, BankError> {
        if let Some(owner) = self.clients.get_mut(client) {
            let account = owner.open_account_with_balance(&mut self.ids, initial)?;
            return Ok(account.id());
        }

        let mut owner = Client::new(client);
        let id = owner.open_account_with_balance(&mut self.ids, initial)?.id();
        self.order.push(client.to_string());
        self.clients.insert(client.to_string(), owner);
        Ok(id)
    }

    fn find_account(&mut self, client: &str, id: AccountId) -> Result<&mut Account, BankError> {
        self.clients
            .get_mut(client)
            .ok_or_else(|| BankError::ClientNotFound(client.to_string()))?
            .account_mut(id)
            .ok_or_else(|| BankError::AccountNotFound(client.to_string(), id))
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

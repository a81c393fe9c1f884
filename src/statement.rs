//! Human-readable account statements and client summaries.

use std::fmt::{self, Write};

use crate::account::Account;
use crate::client::Client;

/// Write one line per history record, oldest first.
pub fn write_statement(w: &mut impl Write, account: &Account) -> fmt::Result {
    match account.id() {
        Some(id) => writeln!(w, "Statement for account #{id} ({})", account.owner())?,
        None => writeln!(w, "Statement for {}", account.owner())?,
    }

    if account.history().is_empty() {
        return writeln!(w, "No operations recorded.");
    }

    for record in account.history() {
        writeln!(
            w,
            "[{}] {:<10} | {:>14} | {}",
            record.timestamp_iso(),
            record.kind(),
            record.amount().to_string(),
            record.status()
        )?;
    }
    writeln!(w, "Balance: {}", account.balance())
}

/// Write the client's name, account count and consolidated balance, then
/// one line per account.
pub fn write_summary(w: &mut impl Write, client: &Client) -> fmt::Result {
    writeln!(w, "Client: {}", client.name())?;
    writeln!(w, "Accounts: {}", client.account_count())?;
    writeln!(w, "Total balance: {}", client.total_balance())?;

    for account in client.accounts() {
        match account.id() {
            Some(id) => writeln!(w, "  Account #{id}: {}", account.balance())?,
            None => writeln!(w, "  Account: {}", account.balance())?,
        }
    }
    Ok(())
}

pub fn statement(account: &Account) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_statement(&mut out, account);
    out
}

pub fn summary(client: &Client) -> String {
    let mut out = String::new();
    let _ = write_summary(&mut out, client);
    out
}

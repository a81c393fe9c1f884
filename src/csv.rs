use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::{AccountId, Amount, Client, Operation};

/// Errors that can occur when reading operations
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open operations file: {0}")]
    Open(csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation type '{op_type}'")]
    UnrecognizedType { line: usize, op_type: String },

    #[error("line {line}: {op_type} missing amount")]
    MissingAmount { line: usize, op_type: String },

    #[error("line {line}: {op_type} missing account")]
    MissingAccount { line: usize, op_type: String },

    #[error("line {line}: {op_type} amount {value} is out of range")]
    InvalidAmount {
        line: usize,
        op_type: String,
        value: f64,
    },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    r#type: String,
    client: String,
    account: Option<AccountId>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    client: &'a str,
    account: Option<AccountId>,
    balance: String,
    operations: usize,
}

/// Read operations from a csv file with a `type,client,account,amount` header
pub fn read_operations(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Operation, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

fn parse_row(line: usize, row: InputRow) -> Result<Operation, CsvError> {
    let op_type = row.r#type.as_str();
    let account = || {
        row.account.ok_or_else(|| CsvError::MissingAccount {
            line,
            op_type: op_type.to_string(),
        })
    };
    let convert = |value: f64| {
        Amount::try_from_float(value).ok_or_else(|| CsvError::InvalidAmount {
            line,
            op_type: op_type.to_string(),
            value,
        })
    };
    let amount = || {
        let value = row.amount.ok_or_else(|| CsvError::MissingAmount {
            line,
            op_type: op_type.to_string(),
        })?;
        convert(value)
    };

    match op_type {
        "open" => Ok(Operation::Open {
            client: row.client.clone(),
            initial: row.amount.map(convert).transpose()?.unwrap_or_default(),
        }),
        "deposit" => Ok(Operation::Deposit {
            client: row.client.clone(),
            account: account()?,
            amount: amount()?,
        }),
        "withdrawal" => Ok(Operation::Withdrawal {
            client: row.client.clone(),
            account: account()?,
            amount: amount()?,
        }),
        other => Err(CsvError::UnrecognizedType {
            line,
            op_type: other.to_string(),
        }),
    }
}

/// Write one row per account of every client
pub fn write_accounts<'a, W: io::Write>(
    writer: W,
    clients: impl IntoIterator<Item = &'a Client>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for client in clients {
        for account in client.accounts() {
            let row = OutputRow {
                client: client.name(),
                account: account.id(),
                balance: account.balance().to_string(),
                operations: account.history().len(),
            };
            writer.serialize(&row)?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn read(content: &str) -> Vec<Result<Operation, CsvError>> {
        let file = write_csv(content);
        read_operations(file.path()).unwrap().collect()
    }

    #[test]
    fn read_open() {
        let results = read("type,client,account,amount\nopen,Yassir,,100.5\nopen,Sara,,\n");
        assert_eq!(results.len(), 2);

        let ops: Vec<_> = results.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            ops[0],
            Operation::Open {
                client: "Yassir".to_string(),
                initial: Amount::from_float(100.5),
            }
        );
        assert_eq!(
            ops[1],
            Operation::Open {
                client: "Sara".to_string(),
                initial: Amount::ZERO,
            }
        );
    }

    #[test]
    fn read_deposit_and_withdrawal() {
        let results =
            read("type,client,account,amount\ndeposit,Ali,1000,10.5\nwithdrawal,Ali,1000,5.25\n");
        let ops: Vec<_> = results.into_iter().map(Result::unwrap).collect();

        assert_eq!(
            ops[0],
            Operation::Deposit {
                client: "Ali".to_string(),
                account: 1000,
                amount: Amount::from_float(10.5),
            }
        );
        assert_eq!(
            ops[1],
            Operation::Withdrawal {
                client: "Ali".to_string(),
                account: 1000,
                amount: Amount::from_float(5.25),
            }
        );
    }

    #[test]
    fn read_with_whitespace() {
        let results = read("type, client, account, amount\ndeposit, Ali, 1000, 10.0\n");
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }

    #[test]
    fn read_returns_error_for_unknown_type() {
        let results = read("type,client,account,amount\ntransfer,Ali,1000,10.0\n");
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(err, CsvError::UnrecognizedType { line: 2, .. }));
    }

    #[test]
    fn read_returns_error_for_missing_amount() {
        let results = read("type,client,account,amount\ndeposit,Ali,1000,\n");
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(err, CsvError::MissingAmount { line: 2, .. }));
    }

    #[test]
    fn read_returns_error_for_missing_account() {
        let results = read("type,client,account,amount\nopen,Ali,,\nwithdrawal,Ali,,3\n");
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(matches!(err, CsvError::MissingAccount { line: 3, .. }));
    }

    #[test]
    fn read_returns_error_for_bad_number() {
        let results = read("type,client,account,amount\ndeposit,Ali,abc,1\n");
        assert!(matches!(results[0], Err(CsvError::Parse { line: 2, .. })));
    }

    #[test]
    fn read_returns_error_for_out_of_range_amount() {
        let results = read(
            "type,client,account,amount\n\
             deposit,Ali,1000,1e15\n\
             withdrawal,Ali,1000,inf\n\
             open,Ali,,-1e300\n\
             deposit,Ali,1000,999999999\n",
        );

        assert!(matches!(results[0], Err(CsvError::InvalidAmount { line: 2, .. })));
        assert!(matches!(results[1], Err(CsvError::InvalidAmount { line: 3, .. })));
        assert!(matches!(results[2], Err(CsvError::InvalidAmount { line: 4, .. })));
        assert_eq!(
            results[3].as_ref().unwrap(),
            &Operation::Deposit {
                client: "Ali".to_string(),
                account: 1000,
                amount: Amount::new(999_999_999),
            }
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_operations("does/not/exist.csv");
        assert!(matches!(result, Err(CsvError::Open(_))));
    }

    #[test]
    fn write_one_row_per_account() {
        let mut ids = Sequence::default();
        let mut client = Client::new("Yassir");
        client
            .open_account_with_balance(&mut ids, Amount::new(100))
            .unwrap()
            .deposit(Amount::new(300))
            .unwrap();
        client.open_account(&mut ids);

        let mut out = Vec::new();
        write_accounts(&mut out, [&client]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "client,account,balance,operations\n\
             Yassir,1000,400.0000,1\n\
             Yassir,1001,0.0000,0\n"
        );
    }
}

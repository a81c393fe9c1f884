use std::env;
use std::io;
use std::process::ExitCode;

use bank_accounts::Bank;
use bank_accounts::csv::{read_operations, write_accounts};
use bank_accounts::statement::{statement, summary};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "usage: bank-accounts <operations.csv> [--statements]";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let statements = match args.next().as_deref() {
        None => false,
        Some("--statements") => true,
        Some(other) => {
            eprintln!("unexpected argument '{other}'\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let operations = match read_operations(path) {
        Ok(operations) => operations,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut bank = Bank::new();
    let (op_sender, op_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in operations {
            match result {
                Ok(op) => {
                    if op_sender.send(op).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    bank.run(ReceiverStream::new(op_receiver)).await;

    if statements {
        for client in bank.clients() {
            println!("{}", summary(client));
            for account in client.accounts() {
                println!("{}", statement(account));
            }
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = write_accounts(io::stdout().lock(), bank.clients()) {
        error!("failed to write accounts: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

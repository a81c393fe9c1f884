pub mod account;
pub mod amount;
pub mod bank;
pub mod client;
pub mod csv;
pub mod ids;
pub mod model;
pub mod rate;
pub mod statement;

pub use account::{Account, AccountError, InvalidArgument, SavingsAccount};
pub use amount::Amount;
pub use bank::{Bank, BankError};
pub use client::Client;
pub use ids::{IdAllocator, Sequence};
pub use model::{AccountId, Operation, OperationKind, OperationRecord, OperationStatus};
pub use rate::Rate;

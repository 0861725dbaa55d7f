mod csv_utils;
mod dto;
mod error;
mod runner;
mod stores;

pub use dto::{Account, Transaction, TransactionType};
pub use error::Error;
pub use runner::run;
pub use stores::{StoreRegistry, TransactionStore};

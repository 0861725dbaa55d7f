//! CSV-file-backed storage for transaction records.
//!
//! The in-memory sequence is the authoritative working copy; the backing
//! file only reflects the last successful [`TransactionStore::save`].
//! Divergence between memory and file in between saves is normal.
//!
//! The store is single-owner and synchronous. Callers sharing one instance
//! across threads must add their own guard around both the record sequence
//! and [`TransactionStore::save`].

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::error;

use crate::csv_utils::{read_csv, write_csv};
use crate::dto::{Account, Transaction, TransactionType};
use crate::Error;

pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Opens a store over the CSV file at `path`, loading every record into
    /// memory in file order.
    ///
    /// The load is all-or-nothing: a missing file, an unreadable file, or a
    /// single row that does not conform to the schema fails the whole
    /// construction with [`Error::Load`]. No rows are silently dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let transactions = read_csv(&path)
            .and_then(|rows| rows.collect::<csv::Result<Vec<Transaction>>>())
            .map_err(|source| {
                error!(path = %path.display(), %source, "failed to load transaction file");
                Error::Load {
                    path: path.clone(),
                    source,
                }
            })?;
        Ok(Self { path, transactions })
    }

    /// All transactions recorded against `account`, in insertion order.
    /// Insertion order is not necessarily timestamp order.
    pub fn transactions_for<'a>(
        &'a self,
        account: &'a Account,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.account_number == account.account_number)
    }

    /// Transactions for `account` whose timestamps fall strictly between
    /// the start of day of `from` and the start of day of `to`.
    ///
    /// Both bounds are exclusive: a transaction recorded exactly at
    /// midnight of `from` or of `to` is not returned. Callers wanting an
    /// inclusive day must widen the range by one day themselves.
    pub fn transactions_between<'a>(
        &'a self,
        account: &'a Account,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = &'a Transaction> {
        let from = from.and_time(NaiveTime::MIN);
        let to = to.and_time(NaiveTime::MIN);
        self.transactions_for(account)
            .filter(move |t| t.timestamp > from && t.timestamp < to)
    }

    /// Appends a transaction for `account`, stamped with the current local
    /// time. In-memory only; call [`save`](Self::save) to make it durable.
    ///
    /// Amount sign and magnitude are recorded as given; validating them is
    /// the domain layer's responsibility.
    pub fn add_transaction(
        &mut self,
        account: &Account,
        tx_type: TransactionType,
        amount: Decimal,
    ) {
        self.transactions.push(Transaction {
            account_number: account.account_number.clone(),
            timestamp: Local::now().naive_local(),
            tx_type,
            amount,
        });
    }

    /// Rewrites the backing file with the full in-memory sequence, header
    /// row first, fixed column order.
    ///
    /// The file is truncated in place; there is no temp-file-plus-rename
    /// step, so a failure mid-write can leave a partial file behind. The
    /// in-memory sequence is untouched either way.
    pub fn save(&self) -> Result<(), Error> {
        File::create(&self.path)
            .map_err(csv::Error::from)
            .and_then(|file| write_csv(file, self.transactions.iter()))
            .map_err(|source| {
                error!(path = %self.path.display(), %source, "failed to persist transaction file");
                Error::Persist {
                    path: self.path.clone(),
                    source,
                }
            })
    }

    /// All in-memory records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Drops every in-memory record, leaving the backing file as it was.
    /// A test-isolation and administrative aid, not part of the normal
    /// operational contract.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// Count of in-memory records.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The backing file this store was opened over.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

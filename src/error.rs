//! Error types for the persistence layer.
//!
//! Two failure kinds cover the whole contract:
//! - [`Error::Load`]: the backing file could not be read into memory
//!   (missing file, I/O failure, or a row that does not match the schema).
//! - [`Error::Persist`]: the in-memory records could not be written back
//!   to the backing file.
//!
//! Neither is retried internally; both surface to the caller as
//! unrecoverable. `csv::Error` carries the underlying `std::io::Error`
//! when the cause is I/O rather than parsing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load transactions from {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to persist transactions to {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

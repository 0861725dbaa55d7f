//! Storage layer for transaction records. Provides:
//! - The CSV-file-backed [`TransactionStore`]
//! - A path-keyed [`StoreRegistry`] for callers that juggle more than one
//!   backing file
//!
//! Current implementation is synchronous, single-owner, direct memory
//! access.

mod registry;
mod transactions;

pub use registry::StoreRegistry;
pub use transactions::TransactionStore;

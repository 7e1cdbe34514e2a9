//! File system writes.
//!
//! Provides staged document updates that honor `--dry-run`.

pub mod transaction;

pub use transaction::Transaction;

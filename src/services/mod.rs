//! Service layer for the expense ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! keeping the in-memory expense list consistent with the database.

pub mod ledger;

pub use ledger::Ledger;

//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - Platform data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;

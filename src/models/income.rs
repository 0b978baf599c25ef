//! Income model
//!
//! The ledger tracks a single income figure. Setting a new one replaces the
//! old; it lives in memory only and is not written to the database.

use serde::{Deserialize, Serialize};

use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub amount: Money,
}

impl Income {
    pub fn new(amount: Money) -> Self {
        Self { amount }
    }
}

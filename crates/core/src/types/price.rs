//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog price. The catalog is priced in US dollars throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self { amount }
    }
}

/// Whole amounts render without a fraction (`$999`), others as stored (`$12.5`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount.normalize())
    }
}

//! Trade receipts returned by portfolio operations.

use crate::{Price, Quantity, Side, Symbol};

/// A completed trade: what moved, and for how much cash.
///
/// Returned by [`Portfolio::buy`](crate::Portfolio::buy) and
/// [`Portfolio::sell`](crate::Portfolio::sell) so callers can render a
/// confirmation without re-deriving the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Whether this was a buy or a sell.
    pub side: Side,
    /// The traded instrument's symbol.
    pub symbol: Symbol,
    /// Number of shares traded.
    pub quantity: Quantity,
    /// Per-share execution price.
    pub price: Price,
    /// Total cash moved: `price * quantity`.
    pub notional: Price,
}

impl Fill {
    pub(crate) fn new(side: Side, symbol: Symbol, quantity: Quantity, price: Price) -> Self {
        Self {
            side,
            symbol,
            quantity,
            price,
            notional: Price(price.0 * quantity as i64),
        }
    }
}

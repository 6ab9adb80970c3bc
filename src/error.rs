//! Error types for trade and registry operations.

use crate::{Price, Quantity, Symbol};

/// Errors returned by portfolio trade operations.
///
/// Every variant is recoverable: a rejected trade leaves the portfolio
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    /// The total cost of a buy exceeds available cash.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: Price, available: Price },

    /// A sell requests more shares than are currently held.
    #[error("insufficient shares: requested {requested}, held {held}")]
    InsufficientShares { requested: Quantity, held: Quantity },

    /// Quantity must be greater than zero.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
}

/// Errors returned by instrument registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The symbol does not resolve to a registered instrument.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(Symbol),

    /// An instrument with this symbol is already registered.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(Symbol),

    /// Instrument prices must be greater than zero.
    #[error("price must be greater than zero, got {0}")]
    InvalidPrice(Price),
}

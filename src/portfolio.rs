//! Portfolio ledger: cash plus held positions, with trade invariants.

use rustc_hash::FxHashMap;

use crate::{Fill, Instrument, Price, Quantity, Registry, Side, Symbol, TradeError};

/// A portfolio holding cash and share positions.
///
/// The ledger enforces the two trading invariants: cash never goes
/// negative, and a sell never exceeds the held quantity. A rejected trade
/// leaves the portfolio untouched. Positions live only while their
/// quantity is positive; selling down to zero removes the entry.
///
/// ```
/// use papertrade::{Instrument, Portfolio, Price, Symbol};
///
/// let aapl = Instrument::new(Symbol::new("AAPL"), "Apple Inc.", Price(150_00));
/// let mut portfolio = Portfolio::new(Price(10_000_00)); // $10,000
///
/// let fill = portfolio.buy(&aapl, 10).unwrap();
/// assert_eq!(fill.notional, Price(1500_00));
/// assert_eq!(portfolio.cash(), Price(8500_00));
/// assert_eq!(portfolio.quantity(&Symbol::new("AAPL")), 10);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portfolio {
    /// Cash balance (cents). Never negative.
    cash: Price,
    /// Held quantity per symbol. No zero-quantity entry persists.
    holdings: FxHashMap<Symbol, Quantity>,
}

impl Portfolio {
    /// Create a portfolio with the given starting cash.
    ///
    /// Negative starting cash is a programming error (use `debug_assert`).
    pub fn new(initial_cash: Price) -> Self {
        debug_assert!(
            initial_cash.0 >= 0,
            "initial cash must be non-negative, got {initial_cash}"
        );
        Self {
            cash: initial_cash,
            holdings: FxHashMap::default(),
        }
    }

    // === Queries ===

    /// Current cash balance.
    #[inline]
    pub fn cash(&self) -> Price {
        self.cash
    }

    /// Held quantity for a symbol. Zero if no position exists.
    pub fn quantity(&self, symbol: &Symbol) -> Quantity {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Iterator over held positions as `(symbol, quantity)` pairs.
    ///
    /// Iteration order is unspecified; display layers should sort.
    pub fn holdings(&self) -> impl Iterator<Item = (&Symbol, Quantity)> {
        self.holdings.iter().map(|(symbol, &qty)| (symbol, qty))
    }

    /// Number of held positions.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if no positions are held.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    // === Trading ===

    /// Buy `quantity` shares of `instrument` at its current price.
    ///
    /// Deducts `price * quantity` from cash and adds the shares to the
    /// position, creating it on first purchase. Fails with
    /// [`TradeError::InsufficientFunds`] when the cost exceeds cash and
    /// [`TradeError::InvalidQuantity`] for a zero quantity; either way
    /// nothing changes.
    pub fn buy(&mut self, instrument: &Instrument, quantity: Quantity) -> Result<Fill, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let cost = match i64::try_from(quantity)
            .ok()
            .and_then(|qty| instrument.price().0.checked_mul(qty))
        {
            Some(cost) => Price(cost),
            // A cost that overflows i64 exceeds any representable cash balance.
            None => {
                return Err(TradeError::InsufficientFunds {
                    required: Price(i64::MAX),
                    available: self.cash,
                });
            }
        };
        if cost > self.cash {
            return Err(TradeError::InsufficientFunds {
                required: cost,
                available: self.cash,
            });
        }
        self.cash.0 -= cost.0;
        *self.holdings.entry(instrument.symbol()).or_insert(0) += quantity;
        Ok(Fill::new(
            Side::Buy,
            instrument.symbol(),
            quantity,
            instrument.price(),
        ))
    }

    /// Sell `quantity` shares of `instrument` at its current price.
    ///
    /// Credits the proceeds to cash and reduces the position, removing it
    /// entirely when the quantity reaches zero. Fails with
    /// [`TradeError::InsufficientShares`] when the position is smaller
    /// than `quantity` (including when no position exists) and
    /// [`TradeError::InvalidQuantity`] for a zero quantity; either way
    /// nothing changes.
    pub fn sell(
        &mut self,
        instrument: &Instrument,
        quantity: Quantity,
    ) -> Result<Fill, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let symbol = instrument.symbol();
        let held = self.quantity(&symbol);
        if held < quantity {
            return Err(TradeError::InsufficientShares {
                requested: quantity,
                held,
            });
        }
        self.cash.0 += instrument.price().0 * quantity as i64;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(&symbol);
        } else {
            self.holdings.insert(symbol, remaining);
        }
        Ok(Fill::new(Side::Sell, symbol, quantity, instrument.price()))
    }

    // === Valuation ===

    /// Total portfolio value: cash plus mark-to-market of every position.
    ///
    /// Positions whose symbol does not resolve in `registry` contribute
    /// zero. That cannot happen when every trade goes through instruments
    /// resolved from the same registry.
    pub fn total_value(&self, registry: &Registry) -> Price {
        let positions: i64 = self
            .holdings
            .iter()
            .map(|(symbol, &qty)| {
                registry
                    .lookup(symbol)
                    .map(|ins| ins.price().0 * qty as i64)
                    .unwrap_or(0)
            })
            .sum();
        Price(self.cash.0 + positions)
    }
}

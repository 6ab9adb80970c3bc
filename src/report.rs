//! Market and portfolio snapshots for display.
//!
//! Pure read-only joins of registry and portfolio state, recomputed on
//! every call — nothing here is cached.

use crate::{Portfolio, Price, Quantity, Registry, Symbol};

/// A market-data listing: one quote per registered instrument.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Quotes in registration order.
    pub quotes: Vec<Quote>,
}

impl MarketSnapshot {
    /// Number of quoted instruments.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no instruments are quoted.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// One instrument's line in the market-data listing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub symbol: Symbol,
    pub name: String,
    pub price: Price,
    pub change_pct: f64,
}

impl Registry {
    /// Snapshot every instrument for a market-data display.
    pub fn market_snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            quotes: self
                .iter()
                .map(|ins| Quote {
                    symbol: ins.symbol(),
                    name: ins.name().to_string(),
                    price: ins.price(),
                    change_pct: ins.change_pct(),
                })
                .collect(),
        }
    }
}

/// A point-in-time view of the portfolio, joined with registry prices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSnapshot {
    /// Held positions, sorted by symbol for stable display.
    pub holdings: Vec<HoldingSnapshot>,
    /// Cash balance.
    pub cash: Price,
    /// Cash plus mark-to-market of all holdings.
    pub total_value: Price,
}

impl PortfolioSnapshot {
    /// Mark-to-market value of the holdings alone.
    pub fn holdings_value(&self) -> Price {
        Price(self.total_value.0 - self.cash.0)
    }
}

/// One position's line in the portfolio display.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldingSnapshot {
    pub symbol: Symbol,
    pub name: String,
    pub quantity: Quantity,
    /// Latest per-share price.
    pub price: Price,
    /// `price * quantity`.
    pub market_value: Price,
}

impl Portfolio {
    /// Snapshot the portfolio against current registry prices.
    ///
    /// Positions that do not resolve in the registry are omitted from the
    /// rows and contribute zero to the total, matching
    /// [`Portfolio::total_value`].
    pub fn snapshot(&self, registry: &Registry) -> PortfolioSnapshot {
        let mut holdings: Vec<HoldingSnapshot> = self
            .holdings()
            .filter_map(|(symbol, quantity)| {
                let instrument = registry.lookup(symbol)?;
                Some(HoldingSnapshot {
                    symbol: *symbol,
                    name: instrument.name().to_string(),
                    quantity,
                    price: instrument.price(),
                    market_value: Price(instrument.price().0 * quantity as i64),
                })
            })
            .collect();
        holdings.sort_by_key(|h| h.symbol);

        PortfolioSnapshot {
            holdings,
            cash: self.cash(),
            total_value: self.total_value(registry),
        }
    }
}

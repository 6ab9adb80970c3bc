//! A tradable instrument: symbol, display name, and live price state.

use std::fmt;

use crate::{Price, Symbol};

/// A tradable instrument with its latest price tick.
///
/// The percent change is derived state: it is recomputed from the old and
/// new price on every update and never set directly. Prices are strictly
/// positive for any instrument that entered through
/// [`Registry::register`](crate::Registry::register).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instrument {
    symbol: Symbol,
    name: String,
    price: Price,
    change_pct: f64,
}

impl Instrument {
    /// Create a new instrument at its seed price.
    ///
    /// A fresh instrument has no prior tick, so the percent change starts
    /// at zero. Non-positive seed prices are a programming error (use
    /// `debug_assert`); [`Registry::register`](crate::Registry::register)
    /// rejects them before they can enter a registry.
    pub fn new(symbol: Symbol, name: impl Into<String>, price: Price) -> Self {
        debug_assert!(price.0 > 0, "seed price must be positive, got {price}");
        Self {
            symbol,
            name: name.into(),
            price,
            change_pct: 0.0,
        }
    }

    /// The instrument's symbol.
    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The latest price.
    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Percent change between the two most recent prices.
    #[inline]
    pub fn change_pct(&self) -> f64 {
        self.change_pct
    }

    /// Apply a new price tick.
    ///
    /// The percent change is computed against the pre-update price, then
    /// the price is replaced. The pre-update price must be positive, which
    /// the registry guarantees for every instrument it owns.
    pub(crate) fn update_price(&mut self, new_price: Price) {
        let old = self.price;
        debug_assert!(
            old.0 > 0,
            "cannot compute change from non-positive price {old}"
        );
        self.change_pct = (new_price.0 - old.0) as f64 / old.0 as f64 * 100.0;
        self.price = new_price;
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} @ {} ({:+.2}%)",
            self.symbol, self.name, self.price, self.change_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl() -> Instrument {
        Instrument::new(Symbol::new("AAPL"), "Apple Inc.", Price(150_00))
    }

    #[test]
    fn new_instrument_has_zero_change() {
        let ins = aapl();
        assert_eq!(ins.symbol(), Symbol::new("AAPL"));
        assert_eq!(ins.name(), "Apple Inc.");
        assert_eq!(ins.price(), Price(150_00));
        assert_eq!(ins.change_pct(), 0.0);
    }

    #[test]
    fn update_price_up_ten_percent() {
        let mut ins = aapl();
        ins.update_price(Price(165_00));
        assert_eq!(ins.price(), Price(165_00));
        assert!((ins.change_pct() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn update_price_down_ten_percent() {
        let mut ins = aapl();
        ins.update_price(Price(135_00));
        assert_eq!(ins.price(), Price(135_00));
        assert!((ins.change_pct() + 10.0).abs() < 1e-10);
    }

    #[test]
    fn change_is_relative_to_previous_tick() {
        let mut ins = aapl();
        ins.update_price(Price(300_00)); // +100%
        ins.update_price(Price(150_00)); // -50% from 300, not 0% from seed
        assert!((ins.change_pct() + 50.0).abs() < 1e-10);
    }

    #[test]
    fn unchanged_price_is_zero_change() {
        let mut ins = aapl();
        ins.update_price(Price(150_00));
        assert_eq!(ins.change_pct(), 0.0);
    }

    #[test]
    fn display() {
        let mut ins = aapl();
        ins.update_price(Price(165_00));
        assert_eq!(
            format!("{}", ins),
            "AAPL: Apple Inc. @ $165.00 (+10.00%)"
        );
    }
}

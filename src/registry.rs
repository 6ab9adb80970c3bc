//! Instrument registry: the set of tradable instruments and their prices.

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::{Instrument, Price, RegistryError, Symbol};

/// Largest move a single simulated tick can make, in cents ($5.00).
pub const MAX_TICK_DELTA: i64 = 5_00;

/// Simulated prices never fall below one cent.
pub const MIN_PRICE: Price = Price(1);

/// The set of tradable instruments, keyed by symbol.
///
/// The registry is the sole owner of instrument state. Prices change only
/// through [`Registry::set_price`] and the simulated tick methods, both of
/// which keep every price strictly positive.
///
/// ```
/// use papertrade::{Instrument, Price, Registry, Symbol};
///
/// let mut registry = Registry::new();
/// registry
///     .register(Instrument::new(Symbol::new("AAPL"), "Apple Inc.", Price(150_00)))
///     .unwrap();
///
/// let aapl = registry.lookup(&Symbol::new("AAPL")).unwrap();
/// assert_eq!(aapl.price(), Price(150_00));
/// assert!(registry.lookup(&Symbol::new("TSLA")).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Instruments in registration order; listings preserve it.
    instruments: Vec<Instrument>,
    /// Symbol -> index into `instruments`.
    by_symbol: FxHashMap<Symbol, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new instrument.
    ///
    /// Rejects duplicate symbols and non-positive seed prices. Instruments
    /// are never removed, so registration order is stable for the lifetime
    /// of the registry.
    pub fn register(&mut self, instrument: Instrument) -> Result<(), RegistryError> {
        if instrument.price().0 <= 0 {
            return Err(RegistryError::InvalidPrice(instrument.price()));
        }
        let symbol = instrument.symbol();
        if self.by_symbol.contains_key(&symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol));
        }
        self.by_symbol.insert(symbol, self.instruments.len());
        self.instruments.push(instrument);
        Ok(())
    }

    /// Look up an instrument by symbol. Exact, case-sensitive match.
    pub fn lookup(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.by_symbol.get(symbol).map(|&i| &self.instruments[i])
    }

    /// Iterator over all instruments, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    /// Number of registered instruments.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if no instruments are registered.
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Apply a new price to the instrument with this symbol.
    ///
    /// Returns the recomputed percent change. The new price must be
    /// positive; rejecting zero here keeps the next change computation
    /// well-defined.
    pub fn set_price(&mut self, symbol: &Symbol, new_price: Price) -> Result<f64, RegistryError> {
        if new_price.0 <= 0 {
            return Err(RegistryError::InvalidPrice(new_price));
        }
        let instrument = self.lookup_mut(symbol)?;
        instrument.update_price(new_price);
        Ok(instrument.change_pct())
    }

    /// Perturb one instrument's price by a uniform random delta in
    /// `[-MAX_TICK_DELTA, +MAX_TICK_DELTA]` cents, floored at [`MIN_PRICE`].
    ///
    /// Returns the new price.
    pub fn tick<R: Rng>(&mut self, symbol: &Symbol, rng: &mut R) -> Result<Price, RegistryError> {
        let instrument = self.lookup_mut(symbol)?;
        Ok(tick_instrument(instrument, rng))
    }

    /// Tick every registered instrument once (a "refresh market data" pass).
    pub fn tick_all<R: Rng>(&mut self, rng: &mut R) {
        for instrument in &mut self.instruments {
            tick_instrument(instrument, rng);
        }
    }

    fn lookup_mut(&mut self, symbol: &Symbol) -> Result<&mut Instrument, RegistryError> {
        match self.by_symbol.get(symbol) {
            Some(&i) => Ok(&mut self.instruments[i]),
            None => Err(RegistryError::UnknownSymbol(*symbol)),
        }
    }
}

fn tick_instrument<R: Rng>(instrument: &mut Instrument, rng: &mut R) -> Price {
    let delta = rng.gen_range(-MAX_TICK_DELTA..=MAX_TICK_DELTA);
    let new_price = Price((instrument.price().0 + delta).max(MIN_PRICE.0));
    instrument.update_price(new_price);
    new_price
}

//! TOML configuration: starting cash and the instrument universe.

use std::path::Path;

use serde::Deserialize;

use papertrade::{Instrument, Portfolio, Price, Registry, Symbol};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Starting cash in dollars.
    #[serde(default = "default_cash")]
    pub starting_cash: f64,
    /// The tradable universe.
    #[serde(default, rename = "instrument")]
    pub instruments: Vec<InstrumentConfig>,
}

/// One `[[instrument]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentConfig {
    pub symbol: String,
    pub name: String,
    /// Seed price in dollars.
    pub price: f64,
}

fn default_cash() -> f64 {
    10_000.0
}

impl Default for Config {
    /// The built-in universe, used when no config file is given.
    fn default() -> Self {
        Self {
            starting_cash: default_cash(),
            instruments: vec![
                InstrumentConfig {
                    symbol: "AAPL".into(),
                    name: "Apple Inc.".into(),
                    price: 150.0,
                },
                InstrumentConfig {
                    symbol: "GOOG".into(),
                    name: "Alphabet Inc.".into(),
                    price: 2500.0,
                },
                InstrumentConfig {
                    symbol: "MSFT".into(),
                    name: "Microsoft Corporation".into(),
                    price: 200.0,
                },
            ],
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        if !self.starting_cash.is_finite() || self.starting_cash < 0.0 {
            return Err(Error::Config(format!(
                "starting_cash must be >= 0, got {}",
                self.starting_cash
            )));
        }
        if self.instruments.is_empty() {
            return Err(Error::Config(
                "at least one [[instrument]] is required".into(),
            ));
        }
        for ins in &self.instruments {
            if Symbol::try_new(&ins.symbol).is_none() || ins.symbol.is_empty() {
                return Err(Error::Config(format!(
                    "symbol must be 1 to {} bytes, got {:?}",
                    Symbol::MAX_LEN,
                    ins.symbol
                )));
            }
            if ins.name.is_empty() {
                return Err(Error::Config(format!(
                    "instrument {} needs a display name",
                    ins.symbol
                )));
            }
            if !ins.price.is_finite() || ins.price <= 0.0 {
                return Err(Error::Config(format!(
                    "price for {} must be > 0, got {}",
                    ins.symbol, ins.price
                )));
            }
        }
        Ok(())
    }

    /// Build the registry and portfolio this config describes.
    pub fn build(&self) -> Result<(Registry, Portfolio)> {
        let mut registry = Registry::new();
        for ins in &self.instruments {
            let symbol = Symbol::try_new(&ins.symbol)
                .ok_or_else(|| Error::Config(format!("symbol too long: {:?}", ins.symbol)))?;
            registry
                .register(Instrument::new(
                    symbol,
                    ins.name.clone(),
                    Price::from_dollars(ins.price),
                ))
                .map_err(|e| Error::Config(e.to_string()))?;
        }
        let portfolio = Portfolio::new(Price::from_dollars(self.starting_cash));
        Ok((registry, portfolio))
    }
}

// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! # papertrade
//!
//! A single-user simulated trading desk: an instrument registry with
//! randomly walking prices, and a portfolio ledger that enforces the
//! trading invariants (no overdraft, no overselling) and computes
//! mark-to-market valuations.
//!
//! ## Features
//!
//! - **Instrument registry**: symbol lookup, registration-order listings,
//!   validated price updates with derived percent change
//! - **Portfolio ledger**: buy/sell with typed rejections, positions that
//!   disappear at quantity zero, cash that can never go negative
//! - **Simulated ticks**: uniform ±$5.00 price moves, floored at $0.01,
//!   driven by any [`rand::Rng`]
//! - **Snapshots**: market-data and portfolio listings recomputed from
//!   live state, never cached
//! - **Fixed-point prices**: integer cents throughout, no floating-point
//!   drift in cash arithmetic
//!
//! ## Quick Start
//!
//! ```
//! use papertrade::{Instrument, Portfolio, Price, Registry, Symbol};
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(Instrument::new(Symbol::new("AAPL"), "Apple Inc.", Price(150_00)))
//!     .unwrap();
//!
//! let mut portfolio = Portfolio::new(Price(10_000_00)); // $10,000
//!
//! // Resolve the instrument, then trade against its current price.
//! let aapl = registry.lookup(&Symbol::new("AAPL")).unwrap().clone();
//! let fill = portfolio.buy(&aapl, 10).unwrap();
//! assert_eq!(fill.notional, Price(1500_00));
//! assert_eq!(portfolio.cash(), Price(8500_00));
//!
//! // A price move changes the valuation, not the ledger.
//! registry.set_price(&Symbol::new("AAPL"), Price(165_00)).unwrap();
//! assert_eq!(portfolio.total_value(&registry), Price(10_150_00));
//! ```
//!
//! ## Rejected trades
//!
//! Trades that would break an invariant return a typed error and leave
//! the portfolio untouched:
//!
//! ```
//! use papertrade::{Instrument, Portfolio, Price, Symbol, TradeError};
//!
//! let aapl = Instrument::new(Symbol::new("AAPL"), "Apple Inc.", Price(150_00));
//! let mut portfolio = Portfolio::new(Price(100_00));
//!
//! let err = portfolio.buy(&aapl, 1).unwrap_err();
//! assert_eq!(
//!     err,
//!     TradeError::InsufficientFunds {
//!         required: Price(150_00),
//!         available: Price(100_00),
//!     }
//! );
//! assert_eq!(portfolio.cash(), Price(100_00));
//!
//! let err = portfolio.sell(&aapl, 1).unwrap_err();
//! assert_eq!(err, TradeError::InsufficientShares { requested: 1, held: 0 });
//! ```
//!
//! ## Simulated market data
//!
//! Price ticks are driven by a caller-supplied RNG, so tests can seed one
//! and applications can use [`rand::thread_rng`]:
//!
//! ```
//! use papertrade::{Instrument, Price, Registry, Symbol, MAX_TICK_DELTA, MIN_PRICE};
//! use rand::SeedableRng;
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(Instrument::new(Symbol::new("MSFT"), "Microsoft", Price(200_00)))
//!     .unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let before = registry.lookup(&Symbol::new("MSFT")).unwrap().price();
//! let after = registry.tick(&Symbol::new("MSFT"), &mut rng).unwrap();
//!
//! assert!((after.0 - before.0).abs() <= MAX_TICK_DELTA);
//! assert!(after >= MIN_PRICE);
//! ```
//!
//! ## Price Representation
//!
//! Prices are stored as [`i64`] cents:
//!
//! ```
//! use papertrade::Price;
//!
//! let price = Price(100_50); // $100.50
//! assert_eq!(format!("{}", price), "$100.50");
//! assert_eq!(Price::from_dollars(100.50), price);
//! ```

mod error;
mod instrument;
mod portfolio;
mod registry;
mod report;
mod result;
mod side;
mod types;

// Re-export public API
pub use error::{RegistryError, TradeError};
pub use instrument::Instrument;
pub use portfolio::Portfolio;
pub use registry::{MAX_TICK_DELTA, MIN_PRICE, Registry};
pub use report::{HoldingSnapshot, MarketSnapshot, PortfolioSnapshot, Quote};
pub use result::Fill;
pub use side::Side;
pub use types::{Price, Quantity, Symbol};

// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! Property-based tests for ledger and pricing invariants.
//!
//! These tests use proptest to verify that key invariants hold
//! across randomly generated trade sequences.

use papertrade::{MIN_PRICE, Instrument, Portfolio, Price, Quantity, Registry, Symbol};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const STARTING_CASH: Price = Price(10_000_00);

fn universe() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(Instrument::new(
            Symbol::new("AAPL"),
            "Apple Inc.",
            Price(150_00),
        ))
        .unwrap();
    registry
        .register(Instrument::new(
            Symbol::new("GOOG"),
            "Alphabet Inc.",
            Price(2500_00),
        ))
        .unwrap();
    registry
        .register(Instrument::new(
            Symbol::new("MSFT"),
            "Microsoft Corporation",
            Price(200_00),
        ))
        .unwrap();
    registry
}

/// Generate one of the universe's symbols
fn symbol_strategy() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        Just(Symbol::new("AAPL")),
        Just(Symbol::new("GOOG")),
        Just(Symbol::new("MSFT")),
    ]
}

/// Generate a trade quantity (zero included, to hit the rejection path)
fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    0u64..=50u64
}

/// Generate a trade: true = buy, false = sell
fn trade_strategy() -> impl Strategy<Value = (bool, Symbol, Quantity)> {
    (any::<bool>(), symbol_strategy(), quantity_strategy())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ========================================================================
    // LEDGER INVARIANTS
    // ========================================================================

    /// Cash never goes negative and no zero-quantity position persists,
    /// no matter what trade sequence is thrown at the ledger.
    #[test]
    fn cash_and_holdings_invariants(
        trades in prop::collection::vec(trade_strategy(), 1..60)
    ) {
        let registry = universe();
        let mut portfolio = Portfolio::new(STARTING_CASH);

        for (is_buy, symbol, qty) in trades {
            let instrument = registry.lookup(&symbol).unwrap();
            // Rejections are expected along the way; the invariants must
            // hold regardless of which trades went through.
            let _ = if is_buy {
                portfolio.buy(instrument, qty)
            } else {
                portfolio.sell(instrument, qty)
            };

            prop_assert!(portfolio.cash() >= Price::ZERO,
                "cash went negative: {}", portfolio.cash());
            for (symbol, qty) in portfolio.holdings() {
                prop_assert!(qty > 0, "zero-quantity holding persisted for {symbol}");
            }
        }
    }

    /// With prices held fixed, buying and selling moves value between cash
    /// and positions but never creates or destroys it.
    #[test]
    fn value_is_conserved_at_fixed_prices(
        trades in prop::collection::vec(trade_strategy(), 1..60)
    ) {
        let registry = universe();
        let mut portfolio = Portfolio::new(STARTING_CASH);

        for (is_buy, symbol, qty) in trades {
            let instrument = registry.lookup(&symbol).unwrap();
            let _ = if is_buy {
                portfolio.buy(instrument, qty)
            } else {
                portfolio.sell(instrument, qty)
            };
        }

        prop_assert_eq!(portfolio.total_value(&registry), STARTING_CASH);
    }

    /// Buying then selling the same quantity at an unchanged price is a
    /// complete round trip: cash restored, position gone.
    #[test]
    fn buy_sell_round_trip(
        symbol in symbol_strategy(),
        qty in 1u64..=4u64,
    ) {
        let registry = universe();
        let mut portfolio = Portfolio::new(STARTING_CASH);
        let instrument = registry.lookup(&symbol).unwrap();

        portfolio.buy(instrument, qty).unwrap();
        portfolio.sell(instrument, qty).unwrap();

        prop_assert_eq!(portfolio.cash(), STARTING_CASH);
        prop_assert!(portfolio.is_empty());
    }

    /// A rejected trade is a strict no-op: cash and every holding are
    /// exactly as they were.
    #[test]
    fn rejected_trades_mutate_nothing(
        qty in 1u64..=50u64,
    ) {
        let registry = universe();
        let mut portfolio = Portfolio::new(Price(100_00));
        let goog = registry.lookup(&Symbol::new("GOOG")).unwrap();

        // Can never afford GOOG at $2500 with $100 cash.
        prop_assert!(portfolio.buy(goog, qty).is_err());
        prop_assert!(portfolio.sell(goog, qty).is_err());
        prop_assert_eq!(portfolio.cash(), Price(100_00));
        prop_assert!(portfolio.is_empty());
    }

    // ========================================================================
    // PRICING INVARIANTS
    // ========================================================================

    /// Simulated ticks keep every price at or above the floor, and the
    /// derived change always describes the move that just happened.
    #[test]
    fn ticks_respect_floor_and_derive_change(
        seed in any::<u64>(),
        rounds in 1usize..40,
    ) {
        let mut registry = universe();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..rounds {
            let before: Vec<Price> = registry.iter().map(|i| i.price()).collect();
            registry.tick_all(&mut rng);
            for (instrument, old) in registry.iter().zip(before) {
                let new = instrument.price();
                prop_assert!(new >= MIN_PRICE);
                let expected = (new.0 - old.0) as f64 / old.0 as f64 * 100.0;
                prop_assert!((instrument.change_pct() - expected).abs() < 1e-10);
            }
        }
    }
}

// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! Interactive trading console.
//!
//! A REPL driving the papertrade registry and ledger.
//!
//! Usage:
//!   cargo run --bin console
//!   console --config desk.toml

mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, warn};
use papertrade::{Portfolio, Registry, Side, Symbol, TradeError};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Interactive console for the papertrade simulated trading desk")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (built-in universe when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => match Config::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let (mut registry, mut portfolio) = match config.build() {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error building universe: {e}");
            process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();

    println!("papertrade console v0.3.0");
    println!(
        "{} instruments, {} cash. Type 'help' for commands, 'quit' to exit.\n",
        registry.len(),
        portfolio.cash()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("papertrade> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        match cmd.as_deref() {
            Some("help" | "h" | "?") => print_help(),
            Some("quit" | "exit" | "q") => break,
            Some("market" | "m") => print_market(&registry),
            Some("portfolio" | "p") => print_portfolio(&portfolio, &registry),
            Some("buy") => handle_trade(&registry, &mut portfolio, Side::Buy, &parts[1..]),
            Some("sell") => handle_trade(&registry, &mut portfolio, Side::Sell, &parts[1..]),
            Some("refresh" | "r") => {
                registry.tick_all(&mut rng);
                println!("Market data updated.");
            }
            Some(cmd) => println!("Unknown command: '{}'. Type 'help' for commands.", cmd),
            None => {}
        }
    }

    println!("Goodbye!");
}

fn print_help() {
    println!(
        r#"
Commands:
  market                 Show market data for every instrument
  buy <symbol> <qty>     Buy shares at the current price
  sell <symbol> <qty>    Sell shares at the current price
  portfolio              Show holdings, cash, and total value
  refresh                Apply one simulated tick to every instrument
  help                   Show this help
  quit                   Exit

Examples:
  buy AAPL 10            Buy 10 shares of AAPL
  sell AAPL 5            Sell 5 shares of AAPL
"#
    );
}

fn print_market(registry: &Registry) {
    let snap = registry.market_snapshot();

    println!();
    println!("              MARKET DATA");
    println!("  ────────────────────────────────────────────");

    if snap.is_empty() {
        println!("  (no instruments)");
        println!();
        return;
    }

    println!(
        "  {:<8} {:<24} {:>10} {:>9}",
        "SYMBOL", "NAME", "PRICE", "CHANGE"
    );
    for quote in &snap.quotes {
        println!(
            "  {:<8} {:<24} {:>10} {:>+8.2}%",
            quote.symbol,
            quote.name,
            format!("{}", quote.price),
            quote.change_pct
        );
    }
    println!();
}

fn print_portfolio(portfolio: &Portfolio, registry: &Registry) {
    let snap = portfolio.snapshot(registry);

    println!();
    println!("              PORTFOLIO");
    println!("  ────────────────────────────────────────────");

    if snap.holdings.is_empty() {
        println!("  (no positions)");
    }
    for holding in &snap.holdings {
        println!(
            "  {} ({}): {} shares @ {} = {}",
            holding.name, holding.symbol, holding.quantity, holding.price, holding.market_value
        );
    }
    println!("  Cash:        {}", snap.cash);
    println!("  Total value: {}", snap.total_value);
    println!();
}

fn handle_trade(registry: &Registry, portfolio: &mut Portfolio, side: Side, args: &[&str]) {
    if args.len() < 2 {
        println!(
            "Usage: {} <symbol> <qty>",
            side.to_string().to_lowercase()
        );
        return;
    }

    let Some(symbol) = Symbol::try_new(args[0]) else {
        println!("Invalid symbol: '{}'", args[0]);
        return;
    };

    let Some(instrument) = registry.lookup(&symbol) else {
        println!("Unknown symbol: '{}'", symbol);
        return;
    };

    let qty: u64 = match args[1].parse() {
        Ok(q) if q > 0 => q,
        _ => {
            println!("Invalid quantity: '{}'", args[1]);
            return;
        }
    };

    let result = match side {
        Side::Buy => portfolio.buy(instrument, qty),
        Side::Sell => portfolio.sell(instrument, qty),
    };

    match result {
        Ok(fill) => {
            info!(
                "filled: {} {} {} @ {}",
                fill.side, fill.quantity, fill.symbol, fill.price
            );
            let verb = match fill.side {
                Side::Buy => "Bought",
                Side::Sell => "Sold",
            };
            println!(
                "{} {} shares of {} at {} (total {}). Cash: {}",
                verb,
                fill.quantity,
                instrument.name(),
                fill.price,
                fill.notional,
                portfolio.cash()
            );
        }
        Err(e @ (TradeError::InsufficientFunds { .. } | TradeError::InsufficientShares { .. })) => {
            warn!("rejected: {side} {qty} {symbol}: {e}");
            println!("Rejected: {e}");
        }
        Err(e) => println!("Rejected: {e}"),
    }
}

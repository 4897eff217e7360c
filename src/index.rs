// ===============================
// src/index.rs
// ===============================
use chrono::Duration;

use crate::clock::Clock;
use crate::domain::{StockClass, StockError};
use crate::stock::Stock;
use crate::trade_log::TradeLog;

/// Seed table, prices in pounds: (symbol, class, last dividend, fixed dividend, par).
const GBCE_SEED: [(&str, StockClass, f64, f64, f64); 5] = [
    ("TEA", StockClass::Common, 0.00, 0.0, 1.00),
    ("POP", StockClass::Common, 0.08, 0.0, 1.00),
    ("ALE", StockClass::Common, 0.23, 0.0, 0.60),
    ("GIN", StockClass::Preferred, 0.08, 2.0, 1.00),
    ("JOE", StockClass::Common, 0.13, 0.0, 2.50),
];

/// Ordered, fixed set of stocks; one entry per symbol.
#[derive(Debug, Clone)]
pub struct StockIndex {
    stocks: Vec<Stock>,
}

impl StockIndex {
    pub fn new(stocks: Vec<Stock>) -> Result<Self, StockError> {
        for (i, s) in stocks.iter().enumerate() {
            if stocks[..i].iter().any(|o| o.symbol() == s.symbol()) {
                return Err(StockError::DuplicateSymbol(s.symbol().to_string()));
            }
        }
        Ok(Self { stocks })
    }

    pub fn gbce() -> Result<Self, StockError> {
        let stocks = GBCE_SEED
            .iter()
            .map(|&(sym, class, last, fixed, par)| Stock::new(sym, class, last, fixed, par))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stocks)
    }

    pub fn exists(&self, symbol: &str) -> bool {
        self.stocks.iter().any(|s| s.symbol() == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stock> { self.stocks.iter() }
    pub fn symbols(&self) -> impl Iterator<Item = &str> { self.stocks.iter().map(|s| s.symbol()) }

    /// Geometric mean of current prices. A zero price is left out of the
    /// product but still counts in the root, same as multiplying by 1.
    pub fn geometric_mean_index(&self) -> f64 {
        if self.stocks.is_empty() {
            return 0.0;
        }
        let product: f64 = self
            .stocks
            .iter()
            .map(|s| s.price())
            .filter(|&p| p != 0.0)
            .product();
        product.powf(1.0 / self.stocks.len() as f64)
    }

    /// Reprice every stock from the trailing window of trades.
    pub fn recalculate_prices<C: Clock>(&mut self, log: &TradeLog<C>, window: Duration) {
        for s in self.stocks.iter_mut() {
            s.recalculate_price(log, window);
        }
    }
}

// ===============================
// src/trade_log.rs
// ===============================
//
// Append-only trade store for one session. Lookups are linear scans; with
// five symbols and a hand-typed log there is nothing to index.
//
use chrono::Duration;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::domain::{Side, Trade, TradeError};

pub struct TradeLog<C: Clock> {
    clock: C,
    trades: Vec<Trade>,
}

impl<C: Clock> TradeLog<C> {
    pub fn new(clock: C) -> Self { Self { clock, trades: Vec::new() } }

    /// Stamp with the log's clock and append. Nothing is stored on error.
    pub fn record(&mut self, symbol: &str, side: Side, qty: i64, price: f64) -> Result<&Trade, TradeError> {
        let trade = match Trade::new(self.clock.now(), symbol, side, qty, price) {
            Ok(t) => t,
            Err(e) => {
                warn!(%symbol, %side, qty, price, error = %e, "trade rejected");
                return Err(e);
            }
        };
        info!(%symbol, %side, qty, price, total = self.trades.len() + 1, "trade recorded");
        self.trades.push(trade);
        Ok(&self.trades[self.trades.len() - 1])
    }

    /// Trades for `symbol` no older than `window`.
    pub fn trades_for<'a>(&'a self, symbol: &'a str, window: Duration) -> impl Iterator<Item = &'a Trade> + 'a {
        let now = self.clock.now();
        self.trades
            .iter()
            .filter(move |t| t.symbol() == symbol && now - t.ts() <= window)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trade> { self.trades.iter() }
    pub fn len(&self) -> usize { self.trades.len() }
    #[cfg(test)]
    pub fn is_empty(&self) -> bool { self.trades.is_empty() }
}

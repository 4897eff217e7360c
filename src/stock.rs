// ===============================
// src/stock.rs
// ===============================
use chrono::Duration;
use tracing::debug;

use crate::clock::Clock;
use crate::domain::{StockClass, StockError};
use crate::trade_log::TradeLog;

/// One entry of the GBCE index. Only `price` moves after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    class: StockClass,
    last_dividend: f64,
    fixed_dividend: f64,
    par_value: f64,
    price: f64,
}

impl Stock {
    /// Price starts at par.
    pub fn new(symbol: &str, class: StockClass, last_dividend: f64, fixed_dividend: f64, par_value: f64) -> Result<Self, StockError> {
        if symbol.is_empty() {
            return Err(StockError::EmptySymbol);
        }
        if !(par_value > 0.0) {
            return Err(StockError::InvalidParValue(symbol.to_string()));
        }
        if !(last_dividend >= 0.0) {
            return Err(StockError::NegativeDividend(symbol.to_string()));
        }
        Ok(Self {
            symbol: symbol.to_string(),
            class,
            last_dividend,
            fixed_dividend,
            par_value,
            price: par_value,
        })
    }

    pub fn symbol(&self) -> &str { &self.symbol }
    pub fn class(&self) -> StockClass { self.class }
    pub fn last_dividend(&self) -> f64 { self.last_dividend }
    pub fn fixed_dividend(&self) -> f64 { self.fixed_dividend }
    pub fn par_value(&self) -> f64 { self.par_value }
    pub fn price(&self) -> f64 { self.price }

    pub fn dividend_yield(&self) -> f64 {
        match self.class {
            StockClass::Common => self.last_dividend / self.price,
            StockClass::Preferred => self.fixed_dividend / self.price,
        }
    }

    /// 0 stands in for "undefined" when there is no dividend.
    pub fn pe_ratio(&self) -> f64 {
        if self.last_dividend != 0.0 {
            self.price / self.last_dividend
        } else {
            0.0
        }
    }

    /// Volume-weighted average of this symbol's trades inside `window`.
    /// Without trading (or with zero total volume) the price is left alone.
    pub fn recalculate_price<C: Clock>(&mut self, log: &TradeLog<C>, window: Duration) -> f64 {
        let (trades, notional, volume) = log
            .trades_for(&self.symbol, window)
            .fold((0usize, 0.0_f64, 0.0_f64), |(n, tq, q), t| {
                let qty = t.qty() as f64;
                (n + 1, tq + qty * t.price(), q + qty)
            });

        if trades > 0 && volume > 0.0 {
            self.price = notional / volume;
        }
        debug!(symbol = %self.symbol, trades, volume, price = self.price, "price recalculated");
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::Side;

    fn common(d: f64, par: f64) -> Stock { Stock::new("ALE", StockClass::Common, d, 0.0, par).unwrap() }

    #[test]
    fn construction_checks() {
        assert_eq!(Stock::new("", StockClass::Common, 0.0, 0.0, 1.0), Err(StockError::EmptySymbol));
        assert_eq!(Stock::new("X", StockClass::Common, 0.0, 0.0, 0.0), Err(StockError::InvalidParValue("X".into())));
        assert_eq!(Stock::new("X", StockClass::Common, -0.1, 0.0, 1.0), Err(StockError::NegativeDividend("X".into())));
        let s = common(0.23, 0.60);
        assert_eq!(s.price(), s.par_value());
    }

    #[test]
    fn common_yield_uses_last_dividend() {
        let s = common(0.23, 0.60);
        assert_eq!(s.dividend_yield(), 0.23 / 0.60);
    }

    #[test]
    fn preferred_yield_uses_fixed_dividend() {
        let s = Stock::new("GIN", StockClass::Preferred, 0.08, 2.0, 1.0).unwrap();
        assert_eq!(s.dividend_yield(), 2.0);
    }

    #[test]
    fn pe_ratio_zero_without_dividend() {
        assert_eq!(common(0.0, 1.0).pe_ratio(), 0.0);
        assert_eq!(common(0.13, 2.5).pe_ratio(), 2.5 / 0.13);
    }

    #[test]
    fn recalculates_volume_weighted_price() {
        let clock = ManualClock::new();
        let mut log = TradeLog::new(clock.clone());
        log.record("ALE", Side::Buy, 10, 2.0).unwrap();
        log.record("ALE", Side::Sell, 20, 3.0).unwrap();
        log.record("POP", Side::Buy, 1000, 99.0).unwrap();
        clock.advance(Duration::minutes(1));

        let mut s = common(0.23, 0.60);
        let px = s.recalculate_price(&log, Duration::minutes(15));
        let expected = (10.0 * 2.0 + 20.0 * 3.0) / 30.0;
        assert!((px - expected).abs() < 1e-12);
        assert_eq!(s.price(), px);
    }

    #[test]
    fn price_kept_without_recent_trades() {
        let clock = ManualClock::new();
        let mut log = TradeLog::new(clock.clone());
        log.record("ALE", Side::Buy, 10, 2.0).unwrap();
        clock.advance(Duration::minutes(16));

        let mut s = common(0.23, 0.60);
        assert_eq!(s.recalculate_price(&log, Duration::minutes(15)), 0.60);
    }

    #[test]
    fn zero_volume_keeps_price() {
        let mut log = TradeLog::new(ManualClock::new());
        log.record("ALE", Side::Buy, 0, 2.0).unwrap();

        let mut s = common(0.23, 0.60);
        assert_eq!(s.recalculate_price(&log, Duration::minutes(15)), 0.60);
        assert!(s.price().is_finite());
    }
}

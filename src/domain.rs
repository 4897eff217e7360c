// ===============================
// src/domain.rs
// ===============================
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side { Buy, Sell }
impl Side {
    /// Past-tense verb used in the trade listing.
    pub fn past_tense(&self) -> &'static str { match self { Side::Buy => "BOUGHT", Side::Sell => "SOLD" } }
}
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::Buy => "buy", Side::Sell => "sell" })
    }
}

/// Stock class decides which dividend feeds the yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockClass { Common, Preferred }
impl StockClass {
    pub fn short_name(&self) -> &'static str { match self { StockClass::Common => "COMM", StockClass::Preferred => "PREF" } }
}

#[derive(Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("empty symbol")]
    EmptySymbol,
    #[error("negative quantity {0}")]
    NegativeQuantity(i64),
    #[error("invalid price {0}")]
    InvalidPrice(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum StockError {
    #[error("empty symbol")]
    EmptySymbol,
    #[error("par value of {0} must be positive")]
    InvalidParValue(String),
    #[error("dividend of {0} must not be negative")]
    NegativeDividend(String),
    #[error("duplicate symbol {0}")]
    DuplicateSymbol(String),
}

/// One accepted trade. Fields are fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    ts: DateTime<Utc>,
    symbol: String,
    side: Side,
    qty: u64,
    price: f64,
}

impl Trade {
    pub fn new(ts: DateTime<Utc>, symbol: &str, side: Side, qty: i64, price: f64) -> Result<Self, TradeError> {
        if symbol.is_empty() {
            return Err(TradeError::EmptySymbol);
        }
        if qty < 0 {
            return Err(TradeError::NegativeQuantity(qty));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(TradeError::InvalidPrice(price));
        }
        Ok(Self { ts, symbol: symbol.to_string(), side, qty: qty as u64, price })
    }

    pub fn ts(&self) -> DateTime<Utc> { self.ts }
    pub fn symbol(&self) -> &str { &self.symbol }
    pub fn side(&self) -> Side { self.side }
    pub fn qty(&self) -> u64 { self.qty }
    pub fn price(&self) -> f64 { self.price }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_rejects_bad_parameters() {
        let now = Utc::now();
        assert_eq!(Trade::new(now, "", Side::Buy, 1, 1.0), Err(TradeError::EmptySymbol));
        assert_eq!(Trade::new(now, "ALE", Side::Buy, -1, 1.0), Err(TradeError::NegativeQuantity(-1)));
        assert_eq!(Trade::new(now, "ALE", Side::Buy, 1, -1.0), Err(TradeError::InvalidPrice(-1.0)));
        assert!(Trade::new(now, "ALE", Side::Sell, 1, f64::NAN).is_err());
        assert_eq!(Trade::new(now, "ALE", Side::Buy, 1, f64::INFINITY), Err(TradeError::InvalidPrice(f64::INFINITY)));
        let huge: f64 = "1e400".parse().unwrap();
        assert!(Trade::new(now, "ALE", Side::Buy, 1, huge).is_err());
    }

    #[test]
    fn trade_accepts_zero_quantity_and_price() {
        let t = Trade::new(Utc::now(), "TEA", Side::Sell, 0, 0.0).unwrap();
        assert_eq!(t.qty(), 0);
        assert_eq!(t.price(), 0.0);
        assert_eq!(t.side().past_tense(), "SOLD");
    }
}

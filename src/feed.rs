// ===============================
// src/feed.rs
// ===============================
//
// Mock trade generator behind the `trade` command: one random trade per
// symbol, side by coin flip, 1..=109 shares at 0.41..=3.39.
//
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Side;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockTrade {
    pub side: Side,
    pub qty: i64,
    pub price: f64,
}

pub struct MockFeed {
    rng: StdRng,
}

impl MockFeed {
    /// Fixed seed gives a reproducible session; otherwise seeded from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn next_trade(&mut self) -> MockTrade {
        let side = if self.rng.gen::<bool>() { Side::Buy } else { Side::Sell };
        let qty = self.rng.gen_range(1..=109);
        let price = 0.41 + self.rng.gen_range(0..299) as f64 / 100.0;
        MockTrade { side, qty, price }
    }
}

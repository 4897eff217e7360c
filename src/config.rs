// ===============================
// src/config.rs
// ===============================
/*
=============================================================================
Project : ssstocks — Super Simple Stocks, a toy GBCE exchange REPL in Rust
Module  : config.rs
Version : 0.1.0
License : MIT

Summary : Tracks five seeded stocks, records manual and random trades,
          reprices stocks from a trailing window of trades and reports
          dividend yield, P/E ratio and the GBCE geometric-mean index.
=============================================================================
*/
use chrono::Duration;
use clap::Parser;
use dotenvy::dotenv;

/// Super Simple Stocks: interactive GBCE trading simulator.
#[derive(Clone, Debug, Parser)]
#[command(name = "ssstocks", version, about)]
pub struct Args {
    /// Trailing window (seconds) used by `price`
    #[arg(long, env = "PRICE_WINDOW_SECS", default_value_t = 900)]
    pub price_window_secs: u32,

    /// Seed for the random `trade` generator (entropy when unset)
    #[arg(long, env = "RNG_SEED")]
    pub seed: Option<u64>,

    /// tracing filter directive, e.g. `info` or `ssstocks=debug`
    #[arg(long = "log", env = "LOG_LEVEL", default_value = "warn")]
    pub log_filter: String,
}

impl Args {
    pub fn price_window(&self) -> Duration {
        Duration::seconds(i64::from(self.price_window_secs))
    }
}

pub fn load() -> Args {
    // .env is optional
    let _ = dotenv();
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fifteen_minutes() {
        let args = Args::try_parse_from(["ssstocks"]).unwrap();
        assert_eq!(args.price_window(), Duration::minutes(15));
        assert_eq!(args.log_filter, "warn");
    }

    #[test]
    fn flags_override() {
        let args = Args::try_parse_from(["ssstocks", "--price-window-secs", "60", "--seed", "9", "--log", "debug"]).unwrap();
        assert_eq!(args.price_window(), Duration::seconds(60));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.log_filter, "debug");
    }
}

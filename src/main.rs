// ===============================
// src/main.rs
// ===============================
/*
=============================================================================
Project : ssstocks — Super Simple Stocks, a toy GBCE exchange REPL in Rust
Module  : main.rs
Version : 0.1.0
License : MIT

Summary : Tracks five seeded stocks, records manual and random trades,
          reprices stocks from a trailing window of trades and reports
          dividend yield, P/E ratio and the GBCE geometric-mean index.
=============================================================================
*/
mod clock;
mod command;
mod config;
mod domain;
mod exchange;
mod feed;
mod index;
mod report;
mod stock;
mod trade_log;

use std::io::{self, Write};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    select,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::clock::SystemClock;
use crate::exchange::{Exchange, Flow};
use crate::feed::MockFeed;
use crate::index::StockIndex;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = config::load();

    // ---- Logging (stderr; stdout belongs to the prompt) ----
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    info!(
        price_window_secs = args.price_window_secs,
        seed = ?args.seed,
        "startup config"
    );

    let index = match StockIndex::gbce() {
        Ok(idx) => idx,
        Err(e) => {
            error!(error = %e, "bad seed table");
            return Err(io::Error::new(io::ErrorKind::InvalidData, e));
        }
    };
    let mut exchange = Exchange::new(index, SystemClock, MockFeed::new(args.seed), args.price_window());

    let mut stdout = io::stdout();
    crate::report::banner(&mut stdout)?;

    // One line at a time; the next read starts only after the previous line is done.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "->")?;
        stdout.flush()?;

        let line = select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                None
            }
        };
        let Some(line) = line else {
            writeln!(stdout)?;
            break;
        };

        if exchange.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    info!(trades = exchange.log().len(), "session ended");
    Ok(())
}

// ===============================
// src/exchange.rs
// ===============================
//
// Session root: owns the stock index, the trade log and the mock feed, and
// dispatches parsed commands against them. Every error is printed as
// `ERROR: ...` and the session keeps going.
//
use std::io::{self, Write};

use chrono::Duration;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::command::{Command, CommandError};
use crate::feed::MockFeed;
use crate::index::StockIndex;
use crate::report;
use crate::trade_log::TradeLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow { Continue, Quit }

pub struct Exchange<C: Clock> {
    index: StockIndex,
    log: TradeLog<C>,
    feed: MockFeed,
    window: Duration,
}

impl<C: Clock> Exchange<C> {
    pub fn new(index: StockIndex, clock: C, feed: MockFeed, window: Duration) -> Self {
        Self { index, log: TradeLog::new(clock), feed, window }
    }

    #[cfg(test)]
    pub fn index(&self) -> &StockIndex { &self.index }
    pub fn log(&self) -> &TradeLog<C> { &self.log }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let result = Command::parse(line)
            .map_err(DispatchError::from)
            .and_then(|cmd| self.execute(cmd, out));
        match result {
            Ok(flow) => Ok(flow),
            Err(DispatchError::Io(e)) => Err(e),
            Err(DispatchError::Command(e)) => {
                debug!(%line, error = %e, "command failed");
                writeln!(out, "ERROR: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, cmd: Command, out: &mut impl Write) -> Result<Flow, DispatchError> {
        match cmd {
            Command::Nothing => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => report::help(out, self.window)?,
            Command::Index => report::index(out, &self.index)?,
            Command::Trade => {
                let symbols: Vec<String> = self.index.symbols().map(str::to_string).collect();
                for sym in symbols {
                    let t = self.feed.next_trade();
                    self.log.record(&sym, t.side, t.qty, t.price).map_err(|source| {
                        CommandError::Rejected { side: t.side, symbol: sym.clone(), source }
                    })?;
                }
                report::trade_count(out, self.log.len())?;
            }
            Command::Order { side, qty, symbol, price } => {
                if !self.index.exists(&symbol) {
                    warn!(%symbol, "order for unknown symbol");
                    return Err(CommandError::UnknownSymbol(symbol).into());
                }
                if let Err(source) = self.log.record(&symbol, side, qty, price) {
                    return Err(CommandError::Rejected { side, symbol, source }.into());
                }
                report::trade_count(out, self.log.len())?;
            }
            Command::List => report::trades(out, self.log.iter())?,
            Command::Price => {
                self.index.recalculate_prices(&self.log, self.window);
                report::prices(out, &self.index)?;
            }
            Command::Yield => report::dividend_yields(out, &self.index)?,
            Command::Pe => report::pe_ratios(out, &self.index)?,
        }
        Ok(Flow::Continue)
    }
}

/// Console failures end the session; command failures are reported and skipped.
#[derive(Debug, thiserror::Error)]
enum DispatchError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

// ===============================
// src/command.rs
// ===============================
use thiserror::Error;

use crate::domain::{Side, TradeError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Index,
    Trade,
    Order { side: Side, qty: i64, symbol: String, price: f64 },
    List,
    Price,
    Yield,
    Pe,
    Quit,
    /// Blank line.
    Nothing,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("syntax is '{verb} <quantity> <symbol> <price>'")]
    Syntax { verb: String },
    #[error("Unknown command {0}")]
    UnknownCommand(String),
    #[error("Unknown symbol {0}")]
    UnknownSymbol(String),
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Cannot {side} shares of {symbol}: {source}")]
    Rejected { side: Side, symbol: String, source: TradeError },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else { return Ok(Command::Nothing) };

        let cmd = match verb {
            "help" => Command::Help,
            "index" => Command::Index,
            "trade" => Command::Trade,
            "list" => Command::List,
            "price" => Command::Price,
            "yield" => Command::Yield,
            "pe" => Command::Pe,
            "quit" => Command::Quit,
            "buy" | "sell" => {
                let side = if verb == "buy" { Side::Buy } else { Side::Sell };
                let args: Vec<&str> = words.collect();
                // extra words after the price are ignored
                let [qty, symbol, price, ..] = args.as_slice() else {
                    return Err(CommandError::Syntax { verb: verb.to_string() });
                };
                let qty = qty
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidNumber { field: "quantity", value: qty.to_string() })?;
                let price = price
                    .parse::<f64>()
                    .map_err(|_| CommandError::InvalidNumber { field: "price", value: price.to_string() })?;
                Command::Order { side, qty, symbol: symbol.to_string(), price }
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}

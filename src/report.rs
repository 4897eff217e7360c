// ===============================
// src/report.rs
// ===============================
//
// Console rendering. Prices and ratios print with 2 decimals, the index with 4.
//
use std::io::{self, Write};

use chrono::{Duration, Local};

use crate::domain::Trade;
use crate::index::StockIndex;

const HELP: &str = "
COMMANDS:

    help   - Show this help.
    index  - Show the list of stock and the All-share index.
    trade  - Add random trading.
    buy    - Buy stock. eg. buy 22 ALE 3.12
    sell   - Sell stock. eg. sell 22 ALE 3.12
    list   - Show trading database.
    price  - Recalculate price of stock based on last {window} trade
    yield  - Show the dividend yield of all stock
    pe     - Show the P/E Ratio of all stock
    quit   - end the program
";

const RULE: &str = "=== ==== ======== ==== ======== ========";

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Super Simple Stocks")?;
    writeln!(out)?;
    writeln!(out, "Use 'help' for instructions")?;
    writeln!(out)
}

pub fn help(out: &mut impl Write, window: Duration) -> io::Result<()> {
    let secs = window.num_seconds();
    let window = if secs % 60 == 0 { format!("{} mins", secs / 60) } else { format!("{secs} secs") };
    writeln!(out, "{}", HELP.replace("{window}", &window))
}

pub fn index(out: &mut impl Write, idx: &StockIndex) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "GBCE Index {:.4}", idx.geometric_mean_index())?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Sym Type Last Div Fix  PAR Val. T. Price")?;
    writeln!(out, "{RULE}")?;
    for s in idx.iter() {
        writeln!(
            out,
            "{:>3} {:>4} {:>8.2} {:>4.2} {:>8.2} {:>8.2}",
            s.symbol(),
            s.class().short_name(),
            s.last_dividend(),
            s.fixed_dividend(),
            s.par_value(),
            s.price()
        )?;
    }
    writeln!(out)
}

pub fn trade_count(out: &mut impl Write, n: usize) -> io::Result<()> {
    writeln!(out, "Done. {n} trading operations in the database")
}

pub fn trades<'a>(out: &mut impl Write, trades: impl Iterator<Item = &'a Trade>) -> io::Result<()> {
    let mut n = 0;
    for t in trades {
        writeln!(
            out,
            "[{}] {} {} shares of {} at {:.2}",
            t.ts().with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
            t.side().past_tense(),
            t.qty(),
            t.symbol(),
            t.price()
        )?;
        n += 1;
    }
    writeln!(out)?;
    writeln!(out, "{n} trading operations in the database")
}

pub fn prices(out: &mut impl Write, idx: &StockIndex) -> io::Result<()> {
    for s in idx.iter() {
        writeln!(out, "Price of {} is {:.2}", s.symbol(), s.price())?;
    }
    Ok(())
}

pub fn dividend_yields(out: &mut impl Write, idx: &StockIndex) -> io::Result<()> {
    for s in idx.iter() {
        writeln!(out, "Dividend Yield of {} is {:.2}", s.symbol(), s.dividend_yield())?;
    }
    Ok(())
}

pub fn pe_ratios(out: &mut impl Write, idx: &StockIndex) -> io::Result<()> {
    for s in idx.iter() {
        writeln!(out, "Price/Earnings Ratio of {} is {:.2}", s.symbol(), s.pe_ratio())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn index_table_rows() {
        let idx = StockIndex::gbce().unwrap();
        let text = render(|o| index(o, &idx));
        assert!(text.contains("GBCE Index 1.0845"));
        assert!(text.contains("GIN PREF     0.08 2.00     1.00     1.00"));
        assert!(text.contains("ALE COMM     0.23 0.00     0.60     0.60"));
    }

    #[test]
    fn ratio_lines() {
        let idx = StockIndex::gbce().unwrap();
        let yields = render(|o| dividend_yields(o, &idx));
        assert!(yields.contains("Dividend Yield of GIN is 2.00"));
        assert!(yields.contains("Dividend Yield of ALE is 0.38"));
        let pe = render(|o| pe_ratios(o, &idx));
        assert!(pe.contains("Price/Earnings Ratio of TEA is 0.00"));
        assert!(pe.contains("Price/Earnings Ratio of JOE is 19.23"));
    }

    #[test]
    fn empty_trade_listing() {
        let text = render(|o| trades(o, std::iter::empty()));
        assert_eq!(text, "\n0 trading operations in the database\n");
    }
}

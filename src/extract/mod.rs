// src/extract/mod.rs

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::DividendRecord;

/// Rows in the wpDataTables markup carry ids like `table_246_row_17`.
/// Dot matches newlines because the cells span multiple lines.
static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<tr id="table_246_row_\d+">.*?</tr>"#).expect("row regex should be valid")
});

/// A cell is an opening `<td>` with arbitrary attributes, text up to the
/// next tag, then the closing `</td>`. Cells wrapping nested markup never
/// match and so never contribute a value.
static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<td[^>]*>([^<]*)</td>").expect("cell regex should be valid"));

/// Minimum cells a row needs before it maps onto a record.
const MIN_CELLS: usize = 6;

/// Scan raw markup for dividend rows and assemble them into records.
///
/// Single pass, document order preserved, no dedup, no sorting. Rows with
/// fewer than six cells are skipped. The first six cells map positionally:
/// ticker, amount, declared date, ex date, record date, payable date; any
/// extra cells are ignored.
pub fn extract_dividends(html: &str) -> Result<Vec<DividendRecord>> {
    let mut records = Vec::new();

    for row in ROW_RE.find_iter(html) {
        let cells: Vec<&str> = CELL_RE
            .captures_iter(row.as_str())
            .map(|c| c.get(1).map_or("", |m| m.as_str()).trim())
            .collect();

        if cells.len() < MIN_CELLS {
            continue;
        }

        records.push(DividendRecord {
            ticker: cells[0].to_string(),
            dividend_amount: parse_amount(cells[1])?,
            declared_date: cells[2].to_string(),
            ex_date: cells[3].to_string(),
            record_date: cells[4].to_string(),
            payable_date: cells[5].to_string(),
        });
    }

    Ok(records)
}

/// Parse a dividend-amount cell into a non-negative decimal.
///
/// An empty or whitespace-only cell means no distribution and yields zero.
/// A leading `$` and thousands separators are tolerated; anything left that
/// still fails to parse aborts the whole run.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    let amount: f64 = cleaned
        .parse()
        .with_context(|| format!("malformed dividend amount cell {:?}", raw))?;
    if amount < 0.0 {
        bail!("negative dividend amount in cell {:?}", raw);
    }

    Ok(amount)
}

// src/report/mod.rs

use crate::model::{DividendRecord, DividendStats};

/// Ticker the history table belongs to.
pub const TICKER: &str = "CONY";

/// How many payments the "most recent" section shows.
const RECENT_COUNT: usize = 5;

/// Payments treated as the trailing twelve months. The input is assumed
/// most-recent-first; the window is positional and never re-sorted.
const TRAILING_WINDOW: usize = 12;

/// Sum the trailing window and derive the per-payment monthly average.
/// An empty sequence yields no stats rather than a division by zero.
pub fn compute_stats(records: &[DividendRecord]) -> Option<DividendStats> {
    if records.is_empty() {
        return None;
    }

    let window = &records[..records.len().min(TRAILING_WINDOW)];
    let trailing_total: f64 = window.iter().map(|r| r.dividend_amount).sum();

    Some(DividendStats {
        total_payments: records.len(),
        last_amount: records[0].dividend_amount,
        trailing_total,
        monthly_average: trailing_total / window.len() as f64,
        window: window.len(),
    })
}

/// Render the console summary: record count, up to five recent payments,
/// and the trailing-window yield estimate when any records exist.
pub fn render_summary(records: &[DividendRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Extracted {} dividend records for {}\n",
        records.len(),
        TICKER
    ));

    out.push_str("\nMost recent dividends:\n");
    for rec in records.iter().take(RECENT_COUNT) {
        out.push_str(&format!(
            "  {}: ${:.4} (payable {})\n",
            rec.ex_date, rec.dividend_amount, rec.payable_date
        ));
    }

    if let Some(stats) = compute_stats(records) {
        out.push_str(&format!(
            "\nEstimated annual dividend (based on last {} payments): ${:.2}\n",
            stats.window, stats.trailing_total
        ));
        out.push_str(&format!(
            "Average monthly dividend: ${:.4}\n",
            stats.monthly_average
        ));
    }

    out
}

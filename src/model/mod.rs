// src/model/mod.rs

use serde::{Deserialize, Serialize};

/// One dividend payment parsed from the history table, field values kept
/// exactly as the markup carried them (dates are verbatim strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendRecord {
    pub ticker: String,
    pub dividend_amount: f64,
    pub declared_date: String,
    pub ex_date: String,
    pub record_date: String,
    pub payable_date: String,
}

/// Statistics derived from the record sequence. Computed for the summary
/// and for logging, never written to the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct DividendStats {
    /// Total records extracted.
    pub total_payments: usize,
    /// Amount of the most recent payment (first record).
    pub last_amount: f64,
    /// Sum over the trailing window.
    pub trailing_total: f64,
    /// `trailing_total` divided by the window size.
    pub monthly_average: f64,
    /// How many payments the trailing window actually covered.
    pub window: usize,
}

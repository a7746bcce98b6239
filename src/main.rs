use anyhow::{Context, Result};
use divminder_extract::{extract, report, store};
use std::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// Fixed file names; the pipeline takes no arguments.
const INPUT_HTML: &str = "dividend_table.html";
const OUTPUT_JSON: &str = "cony_dividends.json";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) read the table markup in one go ──────────────────────────
    let html = fs::read_to_string(INPUT_HTML).with_context(|| format!("reading {}", INPUT_HTML))?;
    info!(bytes = html.len(), "read {}", INPUT_HTML);

    // ─── 3) extract rows into records ────────────────────────────────
    let records = extract::extract_dividends(&html)?;
    info!(records = records.len(), "extracted dividend rows");

    // ─── 4) dump the full sequence to JSON ───────────────────────────
    store::write_records(OUTPUT_JSON, &records)?;

    // ─── 5) print the summary ────────────────────────────────────────
    if let Some(stats) = report::compute_stats(&records) {
        info!(
            total_payments = stats.total_payments,
            last_amount = stats.last_amount,
            trailing_total = stats.trailing_total,
            monthly_average = stats.monthly_average,
            window = stats.window,
            "payment stats"
        );
    }
    print!("{}", report::render_summary(&records));

    Ok(())
}

//! Forecast a year of item and maintenance counts and print the result.
//!
//! Run with `RUST_LOG=inventory_forecast=debug` to see candidate scores.

use inventory_forecast::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn monthly(year: i32, counts: &[u64]) -> Vec<MonthlyCount> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let year = year + (i / 12) as i32;
            MonthlyCount::new(format!("{year}-{:02}", i % 12 + 1), count)
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_forecast=info".into()),
        )
        .init();

    let items = MonthlySeries::from_monthly(&monthly(
        2024,
        &[12, 15, 14, 18, 21, 19, 24, 26, 23, 27, 30, 29],
    ))?;
    let maintenance =
        MonthlySeries::from_monthly(&monthly(2024, &[4, 3, 5, 4, 6, 5, 5, 7, 6, 6, 8, 7]))?;

    let engine = ForecastEngine::new(ForecastConfig::default())?;
    let result = engine.forecast(&items, &maintenance, &[1, 3, 6])?;

    for (name, fit) in [
        ("items", &result.per_series.items),
        ("maintenance", &result.per_series.maintenance),
    ] {
        println!(
            "{name}: {} in {} months via {} ({} confidence)",
            fit.next_value, fit.horizon, fit.name, fit.confidence_level
        );
    }

    for entry in &result.multi_horizon.items {
        println!(
            "  {}: {} [{}, {}]",
            entry.period_label.as_deref().unwrap_or("?"),
            entry.forecast,
            entry.lower,
            entry.upper
        );
    }
    println!(
        "items trend {} ({:+.2}/month)",
        result.trend.items_direction, result.trend.items_slope_per_month
    );

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not serialize result: {e}"),
    }

    Ok(())
}

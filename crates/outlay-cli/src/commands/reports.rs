//! Stats output and filter/period resolution

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use outlay_core::ExpenseFilter;

use super::{open_tracker, truncate};

/// Resolve a period string to optional (from, to) bounds. "all" resolves to
/// no bounds at all, so every record passes regardless of date.
pub fn resolve_period(
    period: &str,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    // If custom dates provided, use those
    if let (Some(from), Some(to)) = (custom_from, custom_to) {
        let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d")
            .context("Invalid --from date format (use YYYY-MM-DD)")?;
        let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .context("Invalid --to date format (use YYYY-MM-DD)")?;
        return Ok((Some(from_date), Some(to_date)));
    }

    let today = Utc::now().date_naive();

    match period.to_lowercase().as_str() {
        "this-month" => {
            let from = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
            Ok((Some(from), Some(today)))
        }
        "last-month" => {
            let last_month = if today.month() == 1 {
                NaiveDate::from_ymd_opt(today.year() - 1, 12, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() - 1, 1).unwrap()
            };
            let last_day = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                .unwrap()
                .pred_opt()
                .unwrap();
            Ok((Some(last_month), Some(last_day)))
        }
        "this-year" => {
            let from = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
            Ok((Some(from), Some(today)))
        }
        "last-30-days" => {
            let from = today - chrono::Duration::days(30);
            Ok((Some(from), Some(today)))
        }
        "last-90-days" => {
            let from = today - chrono::Duration::days(90);
            Ok((Some(from), Some(today)))
        }
        "all" => Ok((None, None)),
        _ => anyhow::bail!("Unknown period: {}. Available: this-month, last-month, this-year, last-30-days, last-90-days, all", period),
    }
}

/// Build an [`ExpenseFilter`] from CLI flags. A named period expands to a
/// date range; explicit --from/--to win when both are given.
pub fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<&str>,
    categories: &[String],
    min: Option<f64>,
    max: Option<f64>,
    search: Option<&str>,
) -> Result<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();

    if let Some(period) = period {
        let (from_date, to_date) = resolve_period(period, from, to)?;
        filter = filter.start_date(from_date).end_date(to_date);
    } else {
        let from_date = from
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .transpose()
            .context("Invalid --from date format (use YYYY-MM-DD)")?;
        let to_date = to
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .transpose()
            .context("Invalid --to date format (use YYYY-MM-DD)")?;
        filter = filter.start_date(from_date).end_date(to_date);
    }

    for category in categories {
        let parsed = category
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        filter = filter.category(parsed);
    }

    filter = filter.min_amount(min).max_amount(max);
    if let Some(search) = search {
        filter = filter.search_term(search);
    }

    Ok(filter)
}

pub fn cmd_stats(data_dir: Option<&Path>, filter: ExpenseFilter) -> Result<()> {
    let mut tracker = open_tracker(data_dir)?;
    tracker.set_filter(filter);
    let stats = tracker.stats();

    println!();
    println!("📊 Spending Statistics");
    println!("   ─────────────────────────────────────────────────────────────");

    if stats.total_expenses == 0 {
        println!("   No matching expenses.");
        println!("   Record one with 'outlay add' or load samples with 'outlay seed'.");
        return Ok(());
    }

    println!("   Expenses: {}", stats.total_expenses);
    println!("   Total: ${:.2}", stats.total_amount);
    println!("   Average: ${:.2}", stats.average_amount);
    if let Some(ref highest) = stats.highest_expense {
        println!(
            "   Highest: ${:.2} ({})",
            highest.amount,
            truncate(&highest.description, 30)
        );
    }
    if let Some(ref lowest) = stats.lowest_expense {
        println!(
            "   Lowest: ${:.2} ({})",
            lowest.amount,
            truncate(&lowest.description, 30)
        );
    }

    println!();
    println!(
        "   {:13} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ──────────────┼────────────┼────────┼───────");

    for entry in &stats.category_breakdown {
        println!(
            "   {:13} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            entry.category.label(),
            entry.total,
            entry.percentage,
            entry.count
        );
    }

    if !stats.monthly_trends.is_empty() {
        println!();
        println!("   {:12} │ {:>10} │ {:>5}", "Month", "Amount", "Count");
        println!("   ─────────────┼────────────┼───────");

        for trend in &stats.monthly_trends {
            println!(
                "   {:12} │ {:>10.2} │ {:>5}",
                trend.label, trend.total, trend.count
            );
        }
    }

    Ok(())
}

//! Expense aggregation
//!
//! Pure functions over expense slices. Everything here recomputes from
//! scratch; nothing is cached or incrementally patched. Callers aggregate
//! whichever view they care about (usually the filtered one).

use std::collections::{HashMap, HashSet};

use crate::dates;
use crate::models::{CategoryBreakdown, Expense, ExpenseCategory, ExpenseStats, MonthlyTrend};

/// Sum of all amounts, 0 for an empty slice
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean amount, 0 for an empty slice
pub fn average_amount(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        0.0
    } else {
        total_amount(expenses) / expenses.len() as f64
    }
}

/// Middle amount of the sorted slice. An even count averages the two middle
/// values; an empty slice yields 0.
pub fn median_amount(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }
    let mut amounts: Vec<f64> = expenses.iter().map(|e| e.amount).collect();
    amounts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = amounts.len() / 2;
    if amounts.len() % 2 == 0 {
        (amounts[mid - 1] + amounts[mid]) / 2.0
    } else {
        amounts[mid]
    }
}

/// Mean spend per distinct calendar date, 0 for an empty slice. Dates are
/// compared as strings, so two spellings of the same day count twice.
pub fn daily_average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }
    let days: HashSet<&str> = expenses.iter().map(|e| e.date.as_str()).collect();
    total_amount(expenses) / days.len() as f64
}

/// Sum of amounts in one category
pub fn category_total(expenses: &[Expense], category: ExpenseCategory) -> f64 {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Number of expenses in one category
pub fn category_count(expenses: &[Expense], category: ExpenseCategory) -> usize {
    expenses.iter().filter(|e| e.category == category).count()
}

/// Largest expense. Strict comparison, so the first of several equal
/// amounts wins. `None` for an empty slice.
pub fn highest_expense(expenses: &[Expense]) -> Option<&Expense> {
    let mut best: Option<&Expense> = None;
    for expense in expenses {
        match best {
            Some(current) if expense.amount > current.amount => best = Some(expense),
            None => best = Some(expense),
            _ => {}
        }
    }
    best
}

/// Smallest expense. Strict comparison, so the first of several equal
/// amounts wins. `None` for an empty slice.
pub fn lowest_expense(expenses: &[Expense]) -> Option<&Expense> {
    let mut best: Option<&Expense> = None;
    for expense in expenses {
        match best {
            Some(current) if expense.amount < current.amount => best = Some(expense),
            None => best = Some(expense),
            _ => {}
        }
    }
    best
}

/// Per-category totals and shares, sorted by total descending.
///
/// Categories are visited in canonical order and the sort is stable, so
/// equal totals always come out in the same order. Categories with no
/// expenses are omitted. Percentages fall back to 0 when the grand total
/// is 0.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryBreakdown> {
    let grand_total = total_amount(expenses);
    let mut breakdown = Vec::new();
    for category in ExpenseCategory::ALL {
        let count = category_count(expenses, category);
        if count == 0 {
            continue;
        }
        let total = category_total(expenses, category);
        breakdown.push(CategoryBreakdown {
            category,
            total,
            count,
            percentage: if grand_total > 0.0 {
                (total / grand_total) * 100.0
            } else {
                0.0
            },
            color: category.color().to_string(),
        });
    }
    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    breakdown
}

/// Spending bucketed by calendar month, sorted ascending by (year, month).
/// Expenses whose dates do not parse share a single "Invalid" bucket, which
/// sorts before all real months.
pub fn monthly_trends(expenses: &[Expense]) -> Vec<MonthlyTrend> {
    let mut buckets: HashMap<Option<(i32, u32)>, (f64, usize)> = HashMap::new();
    for expense in expenses {
        let entry = buckets
            .entry(dates::month_key(&expense.date))
            .or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut entries: Vec<(Option<(i32, u32)>, (f64, usize))> = buckets.into_iter().collect();
    entries.sort_by_key(|(key, _)| *key);

    entries
        .into_iter()
        .map(|(key, (total, count))| match key {
            Some((year, month)) => MonthlyTrend {
                month: dates::month_abbrev(month).to_string(),
                year,
                total,
                count,
                label: format!("{} {}", dates::month_abbrev(month), year),
            },
            None => MonthlyTrend {
                month: "Invalid".to_string(),
                year: 0,
                total,
                count,
                label: "Invalid".to_string(),
            },
        })
        .collect()
}

/// Assemble the full snapshot for a set of expenses. An empty slice yields
/// the canonical empty snapshot.
pub fn build_stats(expenses: &[Expense]) -> ExpenseStats {
    if expenses.is_empty() {
        return ExpenseStats::empty();
    }
    ExpenseStats {
        total_expenses: expenses.len(),
        total_amount: total_amount(expenses),
        average_amount: average_amount(expenses),
        category_breakdown: category_breakdown(expenses),
        monthly_trends: monthly_trends(expenses),
        highest_expense: highest_expense(expenses).cloned(),
        lowest_expense: lowest_expense(expenses).cloned(),
    }
}

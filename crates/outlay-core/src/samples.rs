//! Built-in sample data
//!
//! A small, realistic expense set for first-run demos. Dates are generated
//! relative to today so trends and period filters always have recent buckets
//! to land in.

use chrono::{Days, Utc};

use crate::models::{ExpenseCategory, ExpenseInput};

// (description, amount, category, days ago)
const SAMPLES: [(&str, f64, ExpenseCategory, u64); 20] = [
    ("Grocery shopping at Whole Foods", 127.45, ExpenseCategory::Food, 2),
    ("Monthly gym membership", 49.99, ExpenseCategory::Health, 3),
    ("Uber ride to downtown", 23.50, ExpenseCategory::Transport, 4),
    ("Netflix subscription", 15.99, ExpenseCategory::Entertainment, 6),
    ("Electricity bill", 85.20, ExpenseCategory::Utilities, 8),
    ("Lunch with coworkers", 18.75, ExpenseCategory::Food, 9),
    ("New running shoes", 89.99, ExpenseCategory::Shopping, 12),
    ("Pharmacy prescription", 32.40, ExpenseCategory::Health, 15),
    ("Gas station fill-up", 52.30, ExpenseCategory::Transport, 17),
    ("Concert tickets", 120.00, ExpenseCategory::Entertainment, 21),
    ("Internet bill", 59.99, ExpenseCategory::Utilities, 24),
    ("Dinner at Italian restaurant", 76.80, ExpenseCategory::Food, 27),
    ("Weekend trip hotel", 189.00, ExpenseCategory::Travel, 33),
    ("Flight tickets for vacation", 320.00, ExpenseCategory::Travel, 35),
    ("Coffee beans and filters", 24.15, ExpenseCategory::Food, 38),
    ("Haircut", 35.00, ExpenseCategory::Other, 41),
    ("Water bill", 43.60, ExpenseCategory::Utilities, 46),
    ("Movie night", 28.50, ExpenseCategory::Entertainment, 52),
    ("Winter jacket", 140.00, ExpenseCategory::Shopping, 58),
    ("Train ticket home", 64.25, ExpenseCategory::Transport, 63),
];

/// Build the sample set with dates spread over the last couple of months
pub fn sample_expenses() -> Vec<ExpenseInput> {
    let today = Utc::now().date_naive();
    SAMPLES
        .iter()
        .map(|(description, amount, category, days_ago)| {
            let date = today.checked_sub_days(Days::new(*days_ago)).unwrap_or(today);
            ExpenseInput::new(
                *description,
                *amount,
                category.as_str(),
                date.format("%Y-%m-%d").to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;
    use crate::validate::validate;
    use std::collections::HashSet;

    #[test]
    fn test_samples_pass_validation() {
        for input in sample_expenses() {
            let report = validate(&input);
            assert!(
                report.is_valid(),
                "sample '{}' failed validation: {}",
                input.description,
                report
            );
        }
    }

    #[test]
    fn test_samples_cover_every_category() {
        let seen: HashSet<ExpenseCategory> = sample_expenses()
            .iter()
            .map(|input| input.category.parse().expect("sample category parses"))
            .collect();
        assert_eq!(seen.len(), ExpenseCategory::ALL.len());
    }

    #[test]
    fn test_sample_dates_are_recent_and_parseable() {
        let today = Utc::now().date_naive();
        let expenses = sample_expenses();
        assert_eq!(expenses.len(), 20);
        for input in &expenses {
            let date = parse_date(&input.date).expect("sample date parses");
            assert!(date <= today);
        }
    }
}

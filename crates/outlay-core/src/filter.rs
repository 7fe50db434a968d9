//! Expense filtering
//!
//! A filter is a set of optional dimensions ANDed together. The default
//! filter restricts nothing. Filtering never reorders: survivors keep their
//! position from the input collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::models::{Expense, ExpenseCategory};

/// Filter over the expense collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Inclusive lower date bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub end_date: Option<NaiveDate>,
    /// Allowed categories; empty means no restriction
    pub categories: Vec<ExpenseCategory>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Case-insensitive substring matched against description or category;
    /// empty means no restriction
    pub search_term: String,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower date bound
    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = date;
        self
    }

    /// Set the inclusive upper date bound
    pub fn end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = date;
        self
    }

    /// Add one category to the restriction
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// Replace the category restriction
    pub fn categories(mut self, categories: Vec<ExpenseCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the minimum amount
    pub fn min_amount(mut self, amount: Option<f64>) -> Self {
        self.min_amount = amount;
        self
    }

    /// Set the maximum amount
    pub fn max_amount(mut self, amount: Option<f64>) -> Self {
        self.max_amount = amount;
        self
    }

    /// Set the search term
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// True when no dimension restricts anything
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.categories.is_empty()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.search_term.is_empty()
    }
}

/// Test one expense against a filter.
///
/// Date bounds are inclusive; an expense whose own date does not parse fails
/// the date check whenever a bound is set. The search term matches the
/// description or the category name, case-insensitively.
pub fn matches(expense: &Expense, filter: &ExpenseFilter) -> bool {
    if !dates::in_range(&expense.date, filter.start_date, filter.end_date) {
        return false;
    }
    if !filter.categories.is_empty() && !filter.categories.contains(&expense.category) {
        return false;
    }
    if let Some(min) = filter.min_amount {
        if expense.amount < min {
            return false;
        }
    }
    if let Some(max) = filter.max_amount {
        if expense.amount > max {
            return false;
        }
    }
    if !filter.search_term.is_empty() {
        let term = filter.search_term.to_lowercase();
        let in_description = expense.description.to_lowercase().contains(&term);
        let in_category = expense.category.as_str().contains(&term);
        if !in_description && !in_category {
            return false;
        }
    }
    true
}

/// Apply a filter to a slice, keeping survivors in input order.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| matches(e, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expense(description: &str, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id: format!("id-{}", description),
            description: description.to_string(),
            amount,
            category,
            date: date.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fixture() -> Vec<Expense> {
        vec![
            expense("Groceries", 100.0, ExpenseCategory::Food, "2024-01-15"),
            expense("Dinner out", 200.0, ExpenseCategory::Food, "2024-02-10"),
            expense("Bus pass", 75.0, ExpenseCategory::Transport, "2024-02-15"),
        ]
    }

    fn day(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let expenses = fixture();
        let filtered = filter_expenses(&expenses, &ExpenseFilter::default());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_preserves_order() {
        let expenses = fixture();
        let filter = ExpenseFilter::new().category(ExpenseCategory::Food);
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].description, "Groceries");
        assert_eq!(filtered[1].description, "Dinner out");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expenses = fixture();
        let filter = ExpenseFilter::new().min_amount(Some(80.0));
        let once = filter_expenses(&expenses, &filter);
        let twice = filter_expenses(&once, &filter);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_amount_bounds_combined() {
        let expenses = fixture();
        let filter = ExpenseFilter::new()
            .min_amount(Some(80.0))
            .max_amount(Some(150.0));
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 100.0);
    }

    #[test]
    fn test_amount_bounds_independent() {
        let expenses = vec![
            expense("Small", 25.0, ExpenseCategory::Other, "2024-01-01"),
            expense("Medium", 75.0, ExpenseCategory::Other, "2024-01-02"),
            expense("Large", 150.0, ExpenseCategory::Other, "2024-01-03"),
        ];
        let filter = ExpenseFilter::new()
            .min_amount(Some(50.0))
            .max_amount(Some(100.0));
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Medium");

        let min_only = filter_expenses(&expenses, &ExpenseFilter::new().min_amount(Some(50.0)));
        assert_eq!(min_only.len(), 2);
        let max_only = filter_expenses(&expenses, &ExpenseFilter::new().max_amount(Some(100.0)));
        assert_eq!(max_only.len(), 2);
    }

    #[test]
    fn test_amount_bounds_inclusive() {
        let expenses = fixture();
        let filter = ExpenseFilter::new()
            .min_amount(Some(75.0))
            .max_amount(Some(200.0));
        assert_eq!(filter_expenses(&expenses, &filter).len(), 3);
    }

    #[test]
    fn test_date_range() {
        let expenses = fixture();
        let filter = ExpenseFilter::new()
            .start_date(day("2024-02-01"))
            .end_date(day("2024-02-28"));
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_date_range_excludes_unparseable_dates() {
        let mut expenses = fixture();
        expenses.push(expense("Mystery", 10.0, ExpenseCategory::Other, "not-a-date"));

        let unbounded = filter_expenses(&expenses, &ExpenseFilter::default());
        assert_eq!(unbounded.len(), 4);

        let bounded =
            filter_expenses(&expenses, &ExpenseFilter::new().start_date(day("2000-01-01")));
        assert_eq!(bounded.len(), 3);
        assert!(bounded.iter().all(|e| e.description != "Mystery"));
    }

    #[test]
    fn test_category_membership() {
        let expenses = fixture();
        let filter = ExpenseFilter::new()
            .categories(vec![ExpenseCategory::Transport, ExpenseCategory::Travel]);
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let expenses = fixture();
        let filter = ExpenseFilter::new().search_term("GROC");
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Groceries");
    }

    #[test]
    fn test_search_matches_category_name() {
        let expenses = fixture();
        let filter = ExpenseFilter::new().search_term("transport");
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Bus pass");
    }

    #[test]
    fn test_search_no_match() {
        let expenses = fixture();
        let filter = ExpenseFilter::new().search_term("nonexistent");
        assert!(filter_expenses(&expenses, &filter).is_empty());
    }

    #[test]
    fn test_dimensions_and_together() {
        let expenses = fixture();
        let filter = ExpenseFilter::new()
            .category(ExpenseCategory::Food)
            .min_amount(Some(150.0));
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Dinner out");
    }

    #[test]
    fn test_is_empty() {
        assert!(ExpenseFilter::default().is_empty());
        assert!(!ExpenseFilter::new().search_term("x").is_empty());
        assert!(!ExpenseFilter::new().category(ExpenseCategory::Food).is_empty());
    }
}

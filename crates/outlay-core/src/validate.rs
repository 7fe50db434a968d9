//! Expense input validation
//!
//! Validation produces data, not errors: every field is checked on every
//! call and the failures come back together in a [`ValidationReport`], so a
//! form can show all problems at once. Nothing here returns `Err`.

use serde::Serialize;

use crate::dates::parse_date;
use crate::models::{ExpenseCategory, ExpenseInput};

/// Longest accepted description, counted in characters after trimming
pub const MAX_DESCRIPTION_CHARS: usize = 200;
/// Smallest accepted amount
pub const MIN_AMOUNT: f64 = 0.01;
/// Largest accepted amount
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// One failed check, tied to the field it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Aggregated result of validating one [`ExpenseInput`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: &'static str, message: Option<String>) {
        if let Some(message) = message {
            self.errors.push(FieldError { field, message });
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Check every field of the input and aggregate the failures.
pub fn validate(input: &ExpenseInput) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.push("description", validate_description(&input.description));
    report.push("amount", validate_amount(input.amount));
    report.push("category", validate_category(&input.category));
    report.push("date", validate_date(&input.date));
    report
}

/// Description must be non-empty after trimming and at most 200 characters.
pub fn validate_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Some("Description is required".to_string());
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        return Some("Description must be less than 200 characters".to_string());
    }
    None
}

/// Amount must be a real number between $0.01 and $1,000,000 inclusive.
/// Zero and negative amounts fall under the minimum.
pub fn validate_amount(amount: f64) -> Option<String> {
    if amount.is_nan() {
        return Some("Amount must be a valid number".to_string());
    }
    if amount < MIN_AMOUNT {
        return Some("Amount must be at least $0.01".to_string());
    }
    if amount > MAX_AMOUNT {
        return Some("Amount cannot exceed $1,000,000".to_string());
    }
    None
}

/// Category must name a member of the closed set. Empty and unknown values
/// get the same message.
pub fn validate_category(category: &str) -> Option<String> {
    if category.trim().is_empty() || category.parse::<ExpenseCategory>().is_err() {
        return Some("Category is required".to_string());
    }
    None
}

/// Date must be present and parse as "YYYY-MM-DD".
pub fn validate_date(date: &str) -> Option<String> {
    if date.trim().is_empty() {
        return Some("Date is required".to_string());
    }
    if parse_date(date).is_none() {
        return Some("Invalid date format".to_string());
    }
    None
}

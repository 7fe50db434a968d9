//! Domain models for Outlay

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========== Category Models ==========

/// Spending categories. The set is closed: every expense carries exactly one
/// of these eight values, and unknown names are rejected at the validation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories in canonical order. Aggregations iterate this array so
    /// equal-total ties always resolve the same way.
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Shopping,
        Self::Health,
        Self::Travel,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Other => "other",
        }
    }

    /// Display name for tables and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// Fixed hex color per category, used by breakdown consumers
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#ef4444",
            Self::Transport => "#3b82f6",
            Self::Entertainment => "#8b5cf6",
            Self::Utilities => "#f59e0b",
            Self::Shopping => "#ec4899",
            Self::Health => "#10b981",
            Self::Travel => "#06b6d4",
            Self::Other => "#6b7280",
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "shopping" => Ok(Self::Shopping),
            "health" => Ok(Self::Health),
            "travel" => Ok(Self::Travel),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Expense Models ==========

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque unique id, assigned once and never changed
    pub id: String,
    /// Sanitized description, 1-200 characters
    pub description: String,
    /// Amount in the tracker's single currency, two decimal places
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Calendar date as "YYYY-MM-DD". Kept as text so imported records with
    /// bad dates stay representable; consumers parse leniently.
    pub date: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Raw field values for a new expense, exactly as entered. Category and date
/// stay strings here so validation can report bad values as field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl ExpenseInput {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Partial patch for an existing expense. Only supplied fields change; the id
/// and creation timestamp never do.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new description (re-sanitized on apply)
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set a new category
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set a new date ("YYYY-MM-DD")
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

// ========== Stats Models ==========

/// Per-category slice of the filtered view. Categories with no expenses are
/// omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub total: f64,
    pub count: usize,
    /// Share of the grand total, 0-100. Zero when the grand total is zero.
    pub percentage: f64,
    /// Hex color of the category
    pub color: String,
}

/// One month's spending bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Three-letter month abbreviation ("Jan".."Dec"), or "Invalid" for the
    /// bucket collecting expenses whose dates do not parse
    pub month: String,
    pub year: i32,
    pub total: f64,
    pub count: usize,
    /// Display label like "Jan 2024"
    pub label: String,
}

/// Full aggregate snapshot over a set of expenses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseStats {
    pub total_expenses: usize,
    pub total_amount: f64,
    pub average_amount: f64,
    /// Sorted by total descending; ties keep canonical category order
    pub category_breakdown: Vec<CategoryBreakdown>,
    /// Sorted ascending by (year, month)
    pub monthly_trends: Vec<MonthlyTrend>,
    pub highest_expense: Option<Expense>,
    pub lowest_expense: Option<Expense>,
}

impl ExpenseStats {
    /// The snapshot for an empty collection: zero totals, no breakdown, no
    /// trends, no extremes.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ========== Preference Models ==========

/// UI color theme, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Import Models ==========

/// Counters returned by a batch import
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Records added to the collection
    pub imported: usize,
    /// Records skipped because their id was already present
    pub skipped: usize,
}

//! Expense store controller
//!
//! [`ExpenseTracker`] owns the canonical in-memory collection and the active
//! filter, and mediates every mutation. After each mutation the whole
//! collection is written back to the injected [`Store`] (replace-on-write).
//! Filtered views and stats are recomputed on demand, never cached.

use std::collections::HashSet;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::filter::{self, ExpenseFilter};
use crate::models::{
    Expense, ExpenseCategory, ExpenseInput, ExpenseStats, ExpenseUpdate, ImportOutcome,
};
use crate::sanitize::sanitize_text;
use crate::stats;
use crate::storage::Store;
use crate::validate;

pub struct ExpenseTracker {
    store: Store,
    expenses: Vec<Expense>,
    active_filter: ExpenseFilter,
}

impl ExpenseTracker {
    /// Open a tracker over the given store, loading whatever collection it
    /// holds. A missing or unreadable collection starts empty.
    pub fn open(store: Store) -> Self {
        let expenses = store.expenses().load_or(Vec::new);
        Self {
            store,
            expenses,
            active_filter: ExpenseFilter::default(),
        }
    }

    /// The canonical collection, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The injected store (for consumers that keep preferences beside the
    /// collection)
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn find(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Validate, sanitize, and record a new expense at the front of the
    /// collection. Returns the stored record with its assigned id and
    /// timestamps, or [`Error::Validation`] carrying the full report.
    pub fn add(&mut self, input: &ExpenseInput) -> Result<Expense> {
        let report = validate::validate(input);
        if !report.is_valid() {
            return Err(Error::Validation(report));
        }
        let category: ExpenseCategory = input.category.parse().map_err(Error::InvalidData)?;
        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description: sanitize_text(&input.description),
            amount: input.amount,
            category,
            date: input.date.clone(),
            created_at: now,
            updated_at: now,
        };
        self.expenses.insert(0, expense.clone());
        self.persist()?;
        info!("Added expense {} ({})", expense.id, expense.description);
        Ok(expense)
    }

    /// Merge a partial update into an existing expense. Only supplied fields
    /// change; a supplied description is re-sanitized; `updated_at` is
    /// refreshed. An unknown id is a benign no-op returning `Ok(false)` with
    /// nothing persisted.
    pub fn update(&mut self, id: &str, update: &ExpenseUpdate) -> Result<bool> {
        let position = match self.expenses.iter().position(|e| e.id == id) {
            Some(p) => p,
            None => return Ok(false),
        };
        let expense = &mut self.expenses[position];
        if let Some(description) = &update.description {
            expense.description = sanitize_text(description);
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category) = update.category {
            expense.category = category;
        }
        if let Some(date) = &update.date {
            expense.date = date.clone();
        }
        expense.updated_at = Utc::now();

        self.persist()?;
        info!("Updated expense {}", id);
        Ok(true)
    }

    /// Remove an expense by id. An unknown id is a benign no-op returning
    /// `Ok(false)`.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Ok(false);
        }
        self.persist()?;
        info!("Deleted expense {}", id);
        Ok(true)
    }

    /// Remove every expense and persist the empty collection.
    pub fn clear_all(&mut self) -> Result<()> {
        self.expenses.clear();
        self.persist()?;
        info!("Cleared all expenses");
        Ok(())
    }

    /// Import fully-formed records in one batch. Records whose id already
    /// exists in the collection are silently skipped, as are later
    /// duplicates of an id within the batch. Survivors are prepended as a
    /// block, preserving batch order, and persisted once.
    pub fn import(&mut self, batch: Vec<Expense>) -> Result<ImportOutcome> {
        let mut seen: HashSet<String> = self.expenses.iter().map(|e| e.id.clone()).collect();
        let mut fresh = Vec::new();
        let mut skipped = 0;
        for expense in batch {
            if seen.contains(&expense.id) {
                skipped += 1;
                continue;
            }
            seen.insert(expense.id.clone());
            fresh.push(expense);
        }

        let imported = fresh.len();
        if imported > 0 {
            let existing = std::mem::take(&mut self.expenses);
            self.expenses = fresh;
            self.expenses.extend(existing);
            self.persist()?;
        }
        info!("Imported {} expenses ({} skipped)", imported, skipped);
        Ok(ImportOutcome { imported, skipped })
    }

    /// Replace the active filter. A partial change is expressed by cloning
    /// the current filter and chaining setters on it. Filter state is
    /// session-only and never persisted.
    pub fn set_filter(&mut self, filter: ExpenseFilter) {
        self.active_filter = filter;
    }

    /// Reset the active filter to the match-everything default.
    pub fn clear_filter(&mut self) {
        self.active_filter = ExpenseFilter::default();
    }

    pub fn filter(&self) -> &ExpenseFilter {
        &self.active_filter
    }

    /// The collection as seen through the active filter, recomputed on call
    pub fn filtered(&self) -> Vec<Expense> {
        filter::filter_expenses(&self.expenses, &self.active_filter)
    }

    /// Stats over the filtered view, recomputed on call
    pub fn stats(&self) -> ExpenseStats {
        stats::build_stats(&self.filtered())
    }

    fn persist(&self) -> Result<()> {
        self.store.expenses().save(&self.expenses)
    }
}

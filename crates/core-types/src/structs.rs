use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single sales transaction as loaded from the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDateTime,
    pub category: String,
    pub product: String,
    /// Revenue of the row, never negative.
    pub amount: Decimal,
    pub quantity: u32,
}

impl Transaction {
    /// The calendar day of the transaction.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// An immutable, ordered collection of transactions.
///
/// The base table is loaded once and shared read-only; every filtered view is
/// a fresh `Table`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Transaction>,
}

impl Table {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.category.as_str()))
            .map(|row| row.category.clone())
            .collect()
    }

    /// Earliest and latest transaction day, `None` for an empty table.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(Transaction::day).min()?;
        let max = self.rows.iter().map(Transaction::day).max()?;
        Some((min, max))
    }
}

impl FromIterator<Transaction> for Table {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

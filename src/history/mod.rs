//! Capped calculation history.
//!
//! Every successful calculation can be appended as a [`HistoryRecord`].
//! The store keeps a bounded number of records and evicts the oldest
//! when full. [`InMemoryHistory`] is the only shipped implementation;
//! the [`HistoryStore`] trait keeps the door open for a persistent one.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of records kept before eviction starts.
pub const DEFAULT_CAPACITY: usize = 50;

/// Headline figures of a recorded calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySummary {
    /// Gross amount produced by the calculation.
    #[serde(with = "rust_decimal::serde::str")]
    pub gross: Decimal,
    /// Net amount after withholdings, where applicable.
    #[serde(with = "rust_decimal::serde::str")]
    pub net: Decimal,
    /// One-line human description.
    pub description: String,
}

/// A single recorded calculation with its input and result snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Calculator that produced the record, e.g. `"inss"`.
    pub kind: String,
    /// Short display title.
    pub title: String,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// The input as submitted.
    pub input: serde_json::Value,
    /// The full result payload.
    pub result: serde_json::Value,
    /// Headline figures.
    pub summary: HistorySummary,
}

impl HistoryRecord {
    /// Creates a record with a fresh id and the current timestamp.
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        input: serde_json::Value,
        result: serde_json::Value,
        summary: HistorySummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            title: title.into(),
            timestamp: Utc::now(),
            input,
            result,
            summary,
        }
    }
}

/// Storage for calculation records.
pub trait HistoryStore: Send + Sync {
    /// Appends a record, evicting the oldest if the store is full.
    /// Returns the id of the stored record.
    fn append(&self, record: HistoryRecord) -> Uuid;
    /// Returns all records, newest first.
    fn list(&self) -> Vec<HistoryRecord>;
    /// Removes a record by id. Returns whether it existed.
    fn remove(&self, id: Uuid) -> bool;
    /// Removes every record.
    fn clear(&self);
}

/// In-memory bounded store backed by a mutex-guarded deque.
#[derive(Debug)]
pub struct InMemoryHistory {
    capacity: usize,
    records: Mutex<VecDeque<HistoryRecord>>,
}

impl InMemoryHistory {
    /// Creates a store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a store that keeps at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<HistoryRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&self, record: HistoryRecord) -> Uuid {
        let id = record.id;
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
        id
    }

    fn list(&self) -> Vec<HistoryRecord> {
        self.lock().iter().rev().cloned().collect()
    }

    fn remove(&self, id: Uuid) -> bool {
        let mut records = self.lock();
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

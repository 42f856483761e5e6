//! Prediction history with a fixed capacity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::features::CosmicFeatures;
use crate::prediction::ModelAgreement;

/// One completed prediction. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub model_agreement: ModelAgreement,
    pub input_features: CosmicFeatures,
}

impl LogEntry {
    pub fn new(model_agreement: ModelAgreement, input_features: CosmicFeatures) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            model_agreement,
            input_features,
        }
    }
}

/// Append-only ring buffer: entries stay in insertion order and the oldest
/// one is evicted once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct PredictionLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl PredictionLog {
    /// A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity.min(1024)), capacity }
    }

    /// Append an entry, returning the evicted one if the log was full.
    pub fn push(&mut self, entry: LogEntry) -> Option<LogEntry> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

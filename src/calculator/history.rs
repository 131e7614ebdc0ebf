//! Bounded log of completed calculations.

use super::token::Operator;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::SystemTime;

/// Default number of calculations kept.
pub const MAX_HISTORY_SIZE: usize = 10;

/// One completed `left operator right = result` calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub result: f64,
    /// When the calculation was completed.
    pub timestamp: SystemTime,
}

impl HistoryEntry {
    /// Render the calculation without its result, e.g. `5 + 3`.
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

/// Newest-first calculation history with a fixed capacity.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a completed calculation, evicting the oldest one when full.
    pub fn record(&mut self, left: f64, operator: Operator, right: f64, result: f64) {
        self.entries.push_front(HistoryEntry {
            left,
            operator,
            right,
            result,
            timestamp: SystemTime::now(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent calculation.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut history = History::default();
        history.record(1.0, Operator::Add, 1.0, 2.0);
        history.record(2.0, Operator::Multiply, 3.0, 6.0);

        let results: Vec<f64> = history.iter().map(|e| e.result).collect();
        assert_eq!(results, vec![6.0, 2.0]);
        assert_eq!(history.latest().map(|e| e.result), Some(6.0));
    }

    #[test]
    fn test_oldest_evicted() {
        let mut history = History::with_capacity(3);
        for i in 0..5 {
            history.record(i as f64, Operator::Add, 0.0, i as f64);
        }

        assert_eq!(history.len(), 3);
        let lefts: Vec<f64> = history.iter().map(|e| e.left).collect();
        assert_eq!(lefts, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let history = History::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_expression() {
        let mut history = History::default();
        history.record(5.0, Operator::Subtract, 0.5, 4.5);
        assert_eq!(history.latest().unwrap().expression(), "5 - 0.5");
    }

    #[test]
    fn test_serializes_operator_symbol() {
        let mut history = History::default();
        history.record(5.0, Operator::Divide, 2.0, 2.5);

        let json = serde_json::to_value(history.latest().unwrap()).unwrap();
        assert_eq!(json["operator"], "/");
        assert_eq!(json["result"], 2.5);
    }
}

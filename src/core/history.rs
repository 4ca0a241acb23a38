//! Calculation history.
//!
//! Provides an immutable, newest-first list of finished computations,
//! following the same pure style as the reducer.

use super::reducer::Computation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Record of a single finished computation.
///
/// Items are immutable values; once recorded they are only ever removed,
/// never edited.
///
/// # Example
///
/// ```rust
/// use tally::core::{Computation, HistoryItem};
/// use chrono::Utc;
///
/// let item = HistoryItem::new(
///     Computation {
///         expression: "2 + 2".to_string(),
///         result: "4".to_string(),
///     },
///     Utc::now(),
/// );
/// assert_eq!(item.result, "4");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Unique identifier, assigned when the item is created
    pub id: Uuid,
    /// Expression as typed, e.g. `"12 + 3"`
    pub expression: String,
    /// Formatted result
    pub result: String,
    /// When the computation finished
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Create an item with a fresh v4 identifier.
    pub fn new(computation: Computation, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: computation.expression,
            result: computation.result,
            timestamp,
        }
    }
}

/// Ordered history of computations, newest first.
///
/// History is immutable - every operation returns a new history and leaves
/// the original untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{Computation, History, HistoryItem};
/// use chrono::Utc;
///
/// let item = |expr: &str, result: &str| {
///     HistoryItem::new(
///         Computation {
///             expression: expr.to_string(),
///             result: result.to_string(),
///         },
///         Utc::now(),
///     )
/// };
///
/// let history = History::new()
///     .record(item("1 + 1", "2"))
///     .record(item("2 × 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.items()[0].expression, "2 × 3"); // newest first
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record an item at the front, returning a new history.
    pub fn record(&self, item: HistoryItem) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self { items }
    }

    /// Remove the items at the given positions, returning a new history.
    ///
    /// Offsets refer to positions in [`items`](Self::items). Duplicates
    /// and out-of-range offsets are ignored, so exactly the targeted
    /// existing entries are removed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Computation, History, HistoryItem};
    /// use chrono::Utc;
    ///
    /// let mut history = History::new();
    /// for n in 0..4 {
    ///     history = history.record(HistoryItem::new(
    ///         Computation { expression: format!("{n} + 0"), result: n.to_string() },
    ///         Utc::now(),
    ///     ));
    /// }
    ///
    /// let trimmed = history.remove_offsets(&[0, 2, 9]);
    /// let results: Vec<_> = trimmed.items().iter().map(|i| i.result.as_str()).collect();
    /// assert_eq!(results, ["2", "0"]);
    /// ```
    pub fn remove_offsets(&self, offsets: &[usize]) -> Self {
        let targeted: BTreeSet<usize> = offsets.iter().copied().collect();
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| !targeted.contains(index))
            .map(|(_, item)| item.clone())
            .collect();
        Self { items }
    }

    /// Remove the items with the given identifiers, returning a new history.
    pub fn remove_ids(&self, ids: &[Uuid]) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| !ids.contains(&item.id))
            .cloned()
            .collect();
        Self { items }
    }

    /// Get all items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Get the item at a position, if any.
    pub fn get(&self, offset: usize) -> Option<&HistoryItem> {
        self.items.get(offset)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }
}

impl From<Vec<HistoryItem>> for History {
    fn from(items: Vec<HistoryItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item(expression: &str, result: &str) -> HistoryItem {
        HistoryItem::new(
            Computation {
                expression: expression.to_string(),
                result: result.to_string(),
            },
            Utc::now(),
        )
    }

    fn results(history: &History) -> Vec<&str> {
        history.iter().map(|i| i.result.as_str()).collect()
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.get(0).is_none());
    }

    #[test]
    fn record_puts_newest_first() {
        let history = History::new()
            .record(item("1 + 1", "2"))
            .record(item("1 + 2", "3"))
            .record(item("1 + 3", "4"));

        assert_eq!(results(&history), ["4", "3", "2"]);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(item("1 + 1", "2"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn remove_offsets_removes_exactly_targeted() {
        let history = History::new()
            .record(item("a", "1"))
            .record(item("b", "2"))
            .record(item("c", "3"))
            .record(item("d", "4"));

        let removed = history.remove_offsets(&[1, 3, 1]);
        assert_eq!(results(&removed), ["4", "2"]);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn remove_offsets_ignores_out_of_range() {
        let history = History::new().record(item("a", "1"));
        assert_eq!(history.remove_offsets(&[5]), history);
        assert!(history.remove_offsets(&[0]).is_empty());
    }

    #[test]
    fn remove_ids_targets_identity_not_content() {
        let first = item("1 + 1", "2");
        let twin = item("1 + 1", "2");
        let history = History::new().record(first.clone()).record(twin.clone());

        let removed = history.remove_ids(&[first.id]);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.items()[0].id, twin.id);
    }

    #[test]
    fn items_get_unique_ids() {
        assert_ne!(item("x", "1").id, item("x", "1").id);
    }

    #[test]
    fn history_serializes_as_plain_list() {
        let stamp = Utc::now() - Duration::minutes(5);
        let mut entry = item("6 ÷ 3", "2");
        entry.timestamp = stamp;
        let history = History::new().record(entry);

        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());

        let deserialized: History = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, history);
    }
}

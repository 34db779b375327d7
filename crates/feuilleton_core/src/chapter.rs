//! Chapter records and the bounded context window.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Execution result for a single generated chapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Chapter number, 1-based, matching the position in the full outline.
    pub index: usize,

    /// The outline line this chapter realizes.
    pub outline: String,

    /// The generated prose, after reasoning-marker stripping.
    pub content: String,
}

/// Bounded FIFO of the most recently generated chapters.
///
/// The window only biases the next chapter's generation; it is not the
/// authoritative chapter list. Oldest entries are evicted as new ones are
/// appended.
///
/// # Examples
///
/// ```
/// use feuilleton_core::{ChapterRecord, ContextWindow};
///
/// let mut window = ContextWindow::new(1);
/// window.push(ChapterRecord { index: 1, outline: "第1章 初见：相遇".into(), content: "…".into() });
/// window.push(ChapterRecord { index: 2, outline: "第2章 误会：矛盾".into(), content: "…".into() });
///
/// assert_eq!(window.len(), 1);
/// assert_eq!(window.iter().next().unwrap().index, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextWindow {
    capacity: usize,
    records: VecDeque<ChapterRecord>,
}

impl ContextWindow {
    /// Create a window retaining at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a record, evicting the oldest once capacity is exceeded.
    pub fn push(&mut self, record: ChapterRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Iterate retained records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &ChapterRecord> {
        self.records.iter()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no prior chapters are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize) -> ChapterRecord {
        ChapterRecord {
            index,
            outline: format!("第{}章 标题：概要", index),
            content: format!("chapter {} prose", index),
        }
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut window = ContextWindow::new(2);
        for i in 1..=5 {
            window.push(record(i));
            assert!(window.len() <= 2);
        }
    }

    #[test]
    fn window_keeps_most_recent_in_order() {
        let mut window = ContextWindow::new(3);
        for i in 1..=7 {
            window.push(record(i));
        }
        let indices: Vec<usize> = window.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![5, 6, 7]);
    }

    #[test]
    fn zero_capacity_window_stays_empty() {
        let mut window = ContextWindow::new(0);
        window.push(record(1));
        assert!(window.is_empty());
    }
}

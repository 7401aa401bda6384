use std::collections::VecDeque;

use crate::events::LendingEvent;

/// Default number of transitions kept
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Bounded record of completed transitions, oldest first.
///
/// Purely informational; lending decisions never read it.
#[derive(Debug, Clone)]
pub struct History {
    /// Recorded events
    entries: VecDeque<LendingEvent>,
    /// Maximum number of entries to keep
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }
}

impl History {
    /// Create a history keeping at most `max_size` entries
    #[must_use]
    pub fn with_capacity(max_size: usize) -> Self {
        Self { entries: VecDeque::new(), max_size }
    }

    /// Append an event, evicting the oldest entry when full
    pub fn record(&mut self, event: LendingEvent) {
        if self.max_size == 0 {
            return;
        }
        if self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    /// Recorded events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &LendingEvent> {
        self.entries.iter()
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::events::LendingEvent;

    /// Build a check-out event for `title`
    fn checked_out(title: &str) -> LendingEvent {
        LendingEvent::CheckedOut {
            title: title.to_string(),
            borrower_id: "P101".to_string(),
            borrower_name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_evicts_oldest_entry() {
        let mut history = History::with_capacity(2);
        history.record(checked_out("Dune"));
        history.record(checked_out("1984"));
        history.record(checked_out("Emma"));

        let titles: Vec<&str> = history.iter().map(LendingEvent::title).collect();
        assert_eq!(titles, ["1984", "Emma"]);
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut history = History::with_capacity(0);
        history.record(checked_out("Dune"));
        assert!(history.is_empty());
    }
}

use std::collections::HashMap;

/// Per-item order tally for the current session.
///
/// Counts are keyed by menu item id. Entries that reach zero are removed, so
/// the map never holds a zero-valued count and never goes negative.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    counts: HashMap<String, u32>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one order for the item, creating the entry if absent.
    /// Returns the new count.
    pub fn increment(&mut self, item_id: &str) -> u32 {
        let count = self.counts.entry(item_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Removes one order for the item, floored at zero. The entry is dropped
    /// when the count reaches zero; decrementing an absent item is a no-op.
    /// Returns the resulting count.
    pub fn decrement(&mut self, item_id: &str) -> u32 {
        match self.counts.get_mut(item_id) {
            Some(count) if *count > 1 => {
                *count -= 1;
                *count
            }
            Some(_) => {
                self.counts.remove(item_id);
                0
            }
            None => 0,
        }
    }

    /// Empties the ledger.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    /// Sum of all per-item counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> &HashMap<String, u32> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_creates_and_accumulates() {
        let mut ledger = OrderLedger::new();
        assert_eq!(ledger.increment("kimchi"), 1);
        assert_eq!(ledger.increment("kimchi"), 2);
        assert_eq!(ledger.increment("sundubu"), 1);
        assert_eq!(ledger.total(), 3);
    }

    #[test]
    fn decrement_floors_at_zero_and_drops_entry() {
        let mut ledger = OrderLedger::new();
        ledger.increment("kimchi");
        assert_eq!(ledger.decrement("kimchi"), 0);
        assert!(!ledger.counts().contains_key("kimchi"));

        // Absent item: no-op
        assert_eq!(ledger.decrement("kimchi"), 0);
        assert_eq!(ledger.total(), 0);
    }

    #[test]
    fn no_zero_valued_entries_survive_any_sequence() {
        let mut ledger = OrderLedger::new();
        let ops: &[(&str, bool)] = &[
            ("a", true),
            ("a", true),
            ("b", true),
            ("a", false),
            ("b", false),
            ("b", false),
            ("c", false),
            ("a", false),
        ];
        for (id, up) in ops {
            if *up {
                ledger.increment(id);
            } else {
                ledger.decrement(id);
            }
            assert_eq!(ledger.total(), ledger.counts().values().sum::<u32>());
            assert!(ledger.counts().values().all(|&c| c > 0));
        }
        assert_eq!(ledger.total(), 0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut ledger = OrderLedger::new();
        ledger.increment("a");
        ledger.increment("b");
        ledger.clear();
        assert_eq!(ledger.total(), 0);
        assert!(ledger.counts().is_empty());
    }
}

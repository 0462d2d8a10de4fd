//! Store Statistics Module
//!
//! Point-in-time view of how full the store is.

use serde::Serialize;

// == Store Stats ==
/// Snapshot of the store's fill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    /// Number of live entries when the snapshot was taken
    pub entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
}

impl StoreStats {
    // == Constructor ==
    pub fn new(entries: usize, capacity: usize) -> Self {
        Self { entries, capacity }
    }

    // == Available ==
    /// Returns how many more entries fit before inserts are rejected.
    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.entries)
    }

    // == Utilization ==
    /// Returns entries / capacity, or 1.0 for a zero-capacity store.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            1.0
        } else {
            self.entries as f64 / self.capacity as f64
        }
    }

    // == Is Full ==
    pub fn is_full(&self) -> bool {
        self.entries >= self.capacity
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = StoreStats::default();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.capacity, 0);
    }

    #[test]
    fn test_available() {
        let stats = StoreStats::new(3, 10);
        assert_eq!(stats.available(), 7);
        assert!(!stats.is_full());
    }

    #[test]
    fn test_available_when_full() {
        let stats = StoreStats::new(10, 10);
        assert_eq!(stats.available(), 0);
        assert!(stats.is_full());
    }

    #[test]
    fn test_utilization_empty() {
        let stats = StoreStats::new(0, 10);
        assert_eq!(stats.utilization(), 0.0);
    }

    #[test]
    fn test_utilization_half() {
        let stats = StoreStats::new(5, 10);
        assert_eq!(stats.utilization(), 0.5);
    }

    #[test]
    fn test_utilization_zero_capacity() {
        let stats = StoreStats::new(0, 0);
        assert_eq!(stats.utilization(), 1.0);
        assert!(stats.is_full());
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordered set of series indices that are currently toggled off.
///
/// Indices address positions in the source series list and stay stable
/// across toggles. Membership is binary: an index is either inactive
/// (present) or active (absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveSeries {
    indices: BTreeSet<usize>,
}

impl InactiveSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index` and returns whether it is now active.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            true
        } else {
            self.indices.insert(index);
            false
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.indices.contains(&index)
    }

    #[must_use]
    pub fn inactive_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of active series out of `total`.
    #[must_use]
    pub fn active_count(&self, total: usize) -> usize {
        total.saturating_sub(self.indices.range(..total).count())
    }

    /// Rank of `index` among active series only.
    ///
    /// Returns `None` for inactive indices: they never occupy a visible slot.
    #[must_use]
    pub fn active_rank(&self, index: usize) -> Option<usize> {
        if self.indices.contains(&index) {
            return None;
        }
        Some(self.collapse_slot(index))
    }

    /// Slot where a column at `index` sits: `index` minus the inactive
    /// indices below it. For inactive indices this is where the collapsed
    /// column waits so a later reactivation grows in place.
    #[must_use]
    pub fn collapse_slot(&self, index: usize) -> usize {
        index - self.indices.range(..index).count()
    }

    /// Drops indices that no longer address a series.
    pub fn retain_below(&mut self, len: usize) {
        self.indices.retain(|index| *index < len);
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::InactiveSeries;

    #[test]
    fn toggling_twice_restores_membership() {
        let mut inactive = InactiveSeries::new();
        assert!(!inactive.toggle(2));
        assert!(!inactive.is_active(2));
        assert!(inactive.toggle(2));
        assert_eq!(inactive, InactiveSeries::new());
    }

    #[test]
    fn active_rank_compacts_over_inactive_indices() {
        let mut inactive = InactiveSeries::new();
        inactive.toggle(0);
        inactive.toggle(2);

        assert_eq!(inactive.active_rank(0), None);
        assert_eq!(inactive.active_rank(1), Some(0));
        assert_eq!(inactive.active_rank(3), Some(1));
        assert_eq!(inactive.collapse_slot(2), 1);
        assert_eq!(inactive.active_count(4), 2);
    }

    #[test]
    fn retain_below_drops_stale_indices() {
        let mut inactive = InactiveSeries::new();
        inactive.toggle(1);
        inactive.toggle(5);
        inactive.retain_below(3);
        assert_eq!(inactive.iter().collect::<Vec<_>>(), vec![1]);
    }
}

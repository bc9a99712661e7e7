use crate::domain::{CategoryEntry, Operation};

/// Orders categories and their operations for display, largest first.
pub struct RankingService;

impl RankingService {
    /// Sorts categories by descending magnitude and each category's operations
    /// by descending amount. Ties keep no particular order.
    pub fn rank(mut entries: Vec<CategoryEntry>) -> Vec<CategoryEntry> {
        entries.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));
        for entry in &mut entries {
            Self::rank_operations(&mut entry.operations);
        }
        entries
    }

    pub fn rank_operations(operations: &mut [Operation]) {
        operations.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    }
}

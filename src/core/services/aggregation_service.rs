use std::collections::HashMap;

use crate::domain::{
    category::{ColorToken, IconToken},
    CategoryEntry, Operation,
};

/// Merges per-card category lists into one combined view.
pub struct AggregationService;

impl AggregationService {
    /// Combines two category lists by name.
    ///
    /// Spend and income are summed, icon and color come from the first list
    /// that defines them, and operations from both lists are concatenated and
    /// then grouped by operation name. Output order is first appearance in
    /// `first`, then `second`; callers rank before display.
    pub fn merge(first: &[CategoryEntry], second: &[CategoryEntry]) -> Vec<CategoryEntry> {
        Self::merge_all([first, second])
    }

    /// Same as [`merge`](Self::merge) over any number of sources, in order.
    pub fn merge_all<'a, I>(sources: I) -> Vec<CategoryEntry>
    where
        I: IntoIterator<Item = &'a [CategoryEntry]>,
    {
        let mut merged: Vec<CategoryEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut source_count = 0usize;

        for source in sources {
            source_count += 1;
            for entry in source {
                match index.get(&entry.name) {
                    Some(&slot) => absorb(&mut merged[slot], entry),
                    None => {
                        index.insert(entry.name.clone(), merged.len());
                        merged.push(entry.clone());
                    }
                }
            }
        }

        for entry in &mut merged {
            entry.operations = Self::group_operations(&entry.operations);
            if entry.icon.as_str().is_empty() {
                entry.icon = IconToken::fallback();
            }
            if entry.color.as_str().is_empty() {
                entry.color = ColorToken::fallback();
            }
        }

        tracing::debug!(
            sources = source_count,
            categories = merged.len(),
            "merged category lists"
        );
        merged
    }

    /// Collapses operations sharing a name into one entry with the summed
    /// amount, keeping first-seen order.
    pub fn group_operations<'a, I>(operations: I) -> Vec<Operation>
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut grouped: Vec<Operation> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for operation in operations {
            match index.get(operation.name.as_str()) {
                Some(&slot) => grouped[slot].amount += operation.amount,
                None => {
                    index.insert(operation.name.as_str(), grouped.len());
                    grouped.push(operation.clone());
                }
            }
        }
        grouped
    }
}

fn absorb(target: &mut CategoryEntry, incoming: &CategoryEntry) {
    target.spend += incoming.spend;
    target.income += incoming.income;
    if target.icon.as_str().is_empty() {
        target.icon = incoming.icon.clone();
    }
    if target.color.as_str().is_empty() {
        target.color = incoming.color.clone();
    }
    target
        .operations
        .extend(incoming.operations.iter().cloned());
}

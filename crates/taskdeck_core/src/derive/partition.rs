//! Category partitions over borrowed collections.

use crate::model::category::{Category, Priority};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskStatus};
use std::collections::BTreeMap;

/// Mapping from every key of `K` to the items in that category.
///
/// # Invariants
/// - Every key in `K::ALL` is present, possibly with an empty group.
/// - Groups are pairwise disjoint and their union is the input.
/// - Each group keeps the input's relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a, K: Category, T> {
    groups: BTreeMap<K, Vec<&'a T>>,
}

impl<'a, K: Category, T> Partition<'a, K, T> {
    /// Groups `items` by `key`.
    pub fn build(items: &'a [T], key: impl Fn(&T) -> K) -> Self {
        let mut groups: BTreeMap<K, Vec<&'a T>> =
            K::ALL.iter().map(|category| (*category, Vec::new())).collect();
        for item in items {
            groups.entry(key(item)).or_default().push(item);
        }
        Self { groups }
    }

    pub fn get(&self, key: K) -> &[&'a T] {
        self.groups.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, key: K) -> usize {
        self.get(key).len()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterates `(key, group)` pairs in `K::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &[&'a T])> + '_ {
        self.groups
            .iter()
            .map(|(key, group)| (*key, group.as_slice()))
    }

    /// Counts for every key, zero counts included.
    pub fn counts(&self) -> Vec<(K, usize)> {
        self.iter().map(|(key, group)| (key, group.len())).collect()
    }

    /// Counts for non-empty keys only; pie and bar charts skip zero slices.
    pub fn chart_slices(&self) -> Vec<(K, usize)> {
        self.counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

pub fn partition_by_status(tasks: &[Task]) -> Partition<'_, TaskStatus, Task> {
    Partition::build(tasks, |task| task.status)
}

pub fn partition_by_priority(tasks: &[Task]) -> Partition<'_, Priority, Task> {
    Partition::build(tasks, |task| task.priority)
}

pub fn projects_by_status(projects: &[Project]) -> Partition<'_, ProjectStatus, Project> {
    Partition::build(projects, |project| project.status)
}

#[cfg(test)]
mod tests {
    use super::Partition;
    use crate::model::category::Priority;

    #[test]
    fn empty_input_keeps_every_key() {
        let items: Vec<Priority> = Vec::new();
        let partition = Partition::build(&items, |item| *item);
        assert_eq!(
            partition.counts(),
            vec![
                (Priority::Low, 0),
                (Priority::Medium, 0),
                (Priority::High, 0),
                (Priority::Urgent, 0),
            ]
        );
        assert!(partition.chart_slices().is_empty());
        assert_eq!(partition.total(), 0);
    }

    #[test]
    fn groups_preserve_input_order() {
        let items = vec![(1, Priority::High), (2, Priority::Low), (3, Priority::High)];
        let partition = Partition::build(&items, |item| item.1);
        let high: Vec<i32> = partition
            .get(Priority::High)
            .iter()
            .map(|item| item.0)
            .collect();
        assert_eq!(high, vec![1, 3]);
        assert_eq!(
            partition.chart_slices(),
            vec![(Priority::Low, 1), (Priority::High, 2)]
        );
    }
}

// View - derived, read-only ordering of records

use crate::domain::JobRecord;
use std::sync::Arc;

/// Ordered sequence of records produced by filtering or sorting.
///
/// Shares records with the store through `Arc`; records have no setters,
/// so a view cannot write back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    records: Vec<Arc<JobRecord>>,
}

impl View {
    pub fn new(records: Vec<Arc<JobRecord>>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Arc<JobRecord>] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<JobRecord>> {
        self.records.iter()
    }

    /// Record at a 1-based position, as shown to the user
    pub fn at_position(&self, position: usize) -> Option<&Arc<JobRecord>> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn titles(&self) -> Vec<String> {
        self.records.iter().map(|r| r.title().to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a View {
    type Item = &'a Arc<JobRecord>;
    type IntoIter = std::slice::Iter<'a, Arc<JobRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

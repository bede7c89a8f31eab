// Collection Store - the authoritative set of loaded records

use super::view::View;
use crate::domain::JobRecord;
use std::sync::Arc;

/// All records of the current session, in load order.
///
/// Only [`CollectionStore::replace`] changes it; filtering and sorting read
/// from it and build new views.
#[derive(Debug, Default)]
pub struct CollectionStore {
    records: Vec<Arc<JobRecord>>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set (never merges). Returns the new count.
    pub fn replace(&mut self, records: Vec<JobRecord>) -> usize {
        self.records = records.into_iter().map(Arc::new).collect();
        self.records.len()
    }

    pub fn records(&self) -> &[Arc<JobRecord>] {
        &self.records
    }

    /// Unfiltered, unsorted view of everything
    pub fn view(&self) -> View {
        View::new(self.records.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Job Board - application state owned by the front end
//
// Holds the store plus the current selections. Engines stay pure
// functions; this type only wires them to the store and the ports.

use super::filter::{filter, FilterCriteria};
use super::options::FilterOptions;
use super::sort::{sort, SortOrder};
use super::store::CollectionStore;
use super::view::View;
use crate::domain::{JobRecord, SchemaChoice};
use crate::error::{AppError, Result};
use crate::port::{JobSource, Presenter, TimeProvider};
use std::sync::Arc;
use tracing::{info, warn};

pub struct JobBoard {
    store: CollectionStore,
    time_provider: Arc<dyn TimeProvider>,
    criteria: FilterCriteria,
    order: SortOrder,
}

impl JobBoard {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            store: CollectionStore::new(),
            time_provider,
            criteria: FilterCriteria::default(),
            order: SortOrder::default(),
        }
    }

    /// Load a document from `source` and replace the store.
    ///
    /// On success the selections are reset, since old filter values may not
    /// exist in the new data. On failure nothing changes.
    pub async fn load(&mut self, source: &dyn JobSource, schema: &SchemaChoice) -> Result<usize> {
        let origin = source.describe();

        let records = match Self::fetch_records(source, schema).await {
            Ok(records) => records,
            Err(e) => {
                warn!(source = %origin, error = %e, "Job load failed, keeping previous data");
                return Err(e);
            }
        };

        let count = self.store.replace(records);
        self.criteria = FilterCriteria::default();
        self.order = SortOrder::default();

        info!(source = %origin, count, "Job data loaded");
        Ok(count)
    }

    async fn fetch_records(source: &dyn JobSource, schema: &SchemaChoice) -> Result<Vec<JobRecord>> {
        let document = source.fetch().await?;
        let mapping = schema.resolve(&document);
        Ok(mapping.map_document(&document)?)
    }

    pub fn records(&self) -> &[Arc<JobRecord>] {
        self.store.records()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_records(self.store.records())
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn order(&self) -> &SortOrder {
        &self.order
    }

    /// Current filter applied to the full store
    pub fn filtered(&self) -> View {
        filter(self.store.records(), &self.criteria)
    }

    /// Current sort applied to the full store
    pub fn sorted(&self) -> View {
        sort(self.store.records(), &self.order, self.time_provider.now_millis())
    }

    /// Filter, then sort the survivors
    pub fn current_view(&self) -> View {
        let filtered = self.filtered();
        sort(filtered.records(), &self.order, self.time_provider.now_millis())
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) -> View {
        self.criteria = criteria;
        self.current_view()
    }

    pub fn set_sort(&mut self, order: SortOrder) -> View {
        self.order = order;
        self.current_view()
    }

    /// Drop all selections
    pub fn clear(&mut self) -> View {
        self.criteria = FilterCriteria::default();
        self.order = SortOrder::default();
        self.current_view()
    }

    /// Record at a 1-based position of the current view
    pub fn select(&self, position: usize) -> Result<Arc<JobRecord>> {
        let view = self.current_view();
        view.at_position(position).cloned().ok_or_else(|| {
            AppError::NotFound(format!(
                "no job at position {} ({} shown)",
                position,
                view.len()
            ))
        })
    }

    pub fn find_by_job_number(&self, job_number: &str) -> Result<Arc<JobRecord>> {
        self.store
            .records()
            .iter()
            .find(|record| record.job_number() == Some(job_number))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no job with number {}", job_number)))
    }

    pub fn render(&self, presenter: &dyn Presenter) {
        presenter.render(&self.current_view());
    }

    pub fn render_detail(&self, presenter: &dyn Presenter, position: usize) -> Result<()> {
        let record = self.select(position)?;
        presenter.render_detail(&record);
        Ok(())
    }
}

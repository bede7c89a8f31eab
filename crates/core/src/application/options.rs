// Filter Options - distinct values offered by the level / type / skill selectors

use crate::domain::JobRecord;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Distinct values per filterable field, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Arc<JobRecord>]) -> Self {
        Self {
            levels: distinct(records, JobRecord::level),
            types: distinct(records, JobRecord::job_type),
            skills: distinct(records, JobRecord::skill),
        }
    }
}

fn distinct(records: &[Arc<JobRecord>], field: fn(&JobRecord) -> &str) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| field(record.as_ref()))
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .map(str::to_string)
        .collect()
}

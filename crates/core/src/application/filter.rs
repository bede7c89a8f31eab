// Filter Engine - exact-match level / type / skill predicates

use super::view::View;
use crate::domain::JobRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Selected filter values. `None` or an empty string means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub level: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub skill: Option<String>,
}

impl FilterCriteria {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    /// True when no predicate would be applied
    pub fn is_empty(&self) -> bool {
        active(&self.level).is_none()
            && active(&self.job_type).is_none()
            && active(&self.skill).is_none()
    }

    /// Every active predicate holds (exact, case-sensitive)
    pub fn matches(&self, record: &JobRecord) -> bool {
        let check = |wanted: &Option<String>, actual: &str| {
            active(wanted).map_or(true, |wanted| wanted == actual)
        };

        check(&self.level, record.level())
            && check(&self.job_type, record.job_type())
            && check(&self.skill, record.skill())
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Keep the records matching `criteria`, in input order.
pub fn filter(records: &[Arc<JobRecord>], criteria: &FilterCriteria) -> View {
    let kept: Vec<Arc<JobRecord>> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    debug!(
        level = ?criteria.level,
        job_type = ?criteria.job_type,
        skill = ?criteria.skill,
        input = records.len(),
        kept = kept.len(),
        "Filter applied"
    );

    View::new(kept)
}

// Job Record Domain Model

use super::posted::{normalize, PostedTime};
use serde::Serialize;

/// One job posting, normalized.
///
/// Fields are private: a record is never mutated after construction, so
/// views can share it freely with the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    title: String,
    job_type: String,
    level: String,
    skill: String,
    detail: String,
    posted: PostedTime,
    posted_raw: String,

    // Only present in the Upwork schema
    job_number: Option<String>,
    page_link: Option<String>,
    estimated_time: Option<String>,
}

impl JobRecord {
    /// Start building a record. `posted` is normalized on `build()`.
    pub fn builder(title: impl Into<String>, posted: impl Into<String>) -> JobRecordBuilder {
        JobRecordBuilder {
            title: title.into(),
            posted_raw: posted.into(),
            job_type: String::new(),
            level: String::new(),
            skill: String::new(),
            detail: String::new(),
            job_number: None,
            page_link: None,
            estimated_time: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn posted(&self) -> PostedTime {
        self.posted
    }

    /// The "Posted" text exactly as loaded
    pub fn posted_raw(&self) -> &str {
        &self.posted_raw
    }

    pub fn job_number(&self) -> Option<&str> {
        self.job_number.as_deref()
    }

    pub fn page_link(&self) -> Option<&str> {
        self.page_link.as_deref()
    }

    pub fn estimated_time(&self) -> Option<&str> {
        self.estimated_time.as_deref()
    }
}

/// Builder for [`JobRecord`]
#[derive(Debug, Clone)]
pub struct JobRecordBuilder {
    title: String,
    posted_raw: String,
    job_type: String,
    level: String,
    skill: String,
    detail: String,
    job_number: Option<String>,
    page_link: Option<String>,
    estimated_time: Option<String>,
}

impl JobRecordBuilder {
    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn job_number(mut self, job_number: Option<String>) -> Self {
        self.job_number = job_number;
        self
    }

    pub fn page_link(mut self, page_link: Option<String>) -> Self {
        self.page_link = page_link;
        self
    }

    pub fn estimated_time(mut self, estimated_time: Option<String>) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    pub fn build(self) -> JobRecord {
        JobRecord {
            posted: normalize(&self.posted_raw),
            title: self.title,
            job_type: self.job_type,
            level: self.level,
            skill: self.skill,
            detail: self.detail,
            posted_raw: self.posted_raw,
            job_number: self.job_number,
            page_link: self.page_link,
            estimated_time: self.estimated_time,
        }
    }
}

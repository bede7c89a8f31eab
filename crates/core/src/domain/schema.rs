// Field Mapping - turns raw JSON job maps into typed JobRecords

use super::constants::{ARRAY_FIELD_SEPARATOR, UPWORK_DETECTION_KEY};
use super::error::{DomainError, Result};
use super::job::JobRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expected JSON key for every record field.
///
/// The three optional keys may be left unset; when set and absent from a
/// record, the corresponding field is simply `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub title: String,
    pub posted: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub skill: String,
    pub detail: String,

    #[serde(default)]
    pub job_number: Option<String>,
    #[serde(default)]
    pub page_link: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

impl FieldMapping {
    /// Capitalized keys of the Upwork scrape ("Job No", "Title", ...)
    pub fn upwork() -> Self {
        Self {
            title: "Title".to_string(),
            posted: "Posted".to_string(),
            job_type: "Type".to_string(),
            level: "Level".to_string(),
            skill: "Skill".to_string(),
            detail: "Detail".to_string(),
            job_number: Some("Job No".to_string()),
            page_link: Some("Job Page Link".to_string()),
            estimated_time: Some("Estimated Time".to_string()),
        }
    }

    /// Lowercase keys (title, posted, type, level, skill, detail)
    pub fn simple() -> Self {
        Self {
            title: "title".to_string(),
            posted: "posted".to_string(),
            job_type: "type".to_string(),
            level: "level".to_string(),
            skill: "skill".to_string(),
            detail: "detail".to_string(),
            job_number: None,
            page_link: None,
            estimated_time: None,
        }
    }

    /// Map a whole document. Fails on the first malformed record.
    pub fn map_document(&self, document: &Value) -> Result<Vec<JobRecord>> {
        let items = document.as_array().ok_or(DomainError::NotAnArray)?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let record = item
                    .as_object()
                    .ok_or(DomainError::RecordNotObject { index })?;
                self.map_record(index, record)
            })
            .collect()
    }

    fn map_record(&self, index: usize, record: &Map<String, Value>) -> Result<JobRecord> {
        let required = |key: &str| -> Result<String> {
            field_text(index, record, key)?.ok_or_else(|| DomainError::MissingField {
                index,
                key: key.to_string(),
            })
        };
        let optional = |key: &Option<String>| -> Result<Option<String>> {
            match key {
                Some(key) => field_text(index, record, key),
                None => Ok(None),
            }
        };

        Ok(JobRecord::builder(required(&self.title)?, required(&self.posted)?)
            .job_type(required(&self.job_type)?)
            .level(required(&self.level)?)
            .skill(required(&self.skill)?)
            .detail(required(&self.detail)?)
            .job_number(optional(&self.job_number)?)
            .page_link(optional(&self.page_link)?)
            .estimated_time(optional(&self.estimated_time)?)
            .build())
    }
}

/// Read one field as text.
///
/// Absent -> `Ok(None)`; null -> empty string; numbers and booleans keep
/// their JSON text; arrays of scalars are joined. Objects are rejected.
fn field_text(index: usize, record: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    let Some(value) = record.get(key) else {
        return Ok(None);
    };

    let invalid = || DomainError::InvalidField {
        index,
        key: key.to_string(),
    };

    match value {
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(invalid))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(parts.join(ARRAY_FIELD_SEPARATOR)))
        }
        other => scalar_text(other).map(Some).ok_or_else(invalid),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Which field mapping to use for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Upwork if the first record carries "Title", otherwise simple
    #[default]
    Auto,
    Upwork,
    Simple,
}

impl SchemaKind {
    /// Pick the concrete mapping for `document`
    pub fn resolve(&self, document: &Value) -> FieldMapping {
        match self {
            SchemaKind::Upwork => FieldMapping::upwork(),
            SchemaKind::Simple => FieldMapping::simple(),
            SchemaKind::Auto => {
                let is_upwork = document
                    .as_array()
                    .and_then(|items| items.first())
                    .and_then(Value::as_object)
                    .is_some_and(|first| first.contains_key(UPWORK_DETECTION_KEY));
                if is_upwork {
                    FieldMapping::upwork()
                } else {
                    FieldMapping::simple()
                }
            }
        }
    }
}

/// A preset (possibly auto-detected) or a mapping supplied by configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaChoice {
    Preset(SchemaKind),
    Custom(FieldMapping),
}

impl SchemaChoice {
    pub fn resolve(&self, document: &Value) -> FieldMapping {
        match self {
            SchemaChoice::Preset(kind) => kind.resolve(document),
            SchemaChoice::Custom(mapping) => mapping.clone(),
        }
    }
}

impl Default for SchemaChoice {
    fn default() -> Self {
        SchemaChoice::Preset(SchemaKind::Auto)
    }
}

impl From<SchemaKind> for SchemaChoice {
    fn from(kind: SchemaKind) -> Self {
        SchemaChoice::Preset(kind)
    }
}

impl std::str::FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SchemaKind::Auto),
            "upwork" => Ok(SchemaKind::Upwork),
            "simple" => Ok(SchemaKind::Simple),
            other => Err(format!(
                "unknown schema '{}' (expected auto, upwork or simple)",
                other
            )),
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Auto => write!(f, "auto"),
            SchemaKind::Upwork => write!(f, "upwork"),
            SchemaKind::Simple => write!(f, "simple"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostedTime;
    use serde_json::json;

    #[test]
    fn test_upwork_schema() {
        let doc = json!([{
            "Job No": 42,
            "Title": "Rust Developer",
            "Job Page Link": "https://example.com/42",
            "Posted": "8 minutes ago",
            "Type": "Hourly",
            "Level": "Expert",
            "Estimated Time": "Less than 1 month",
            "Skill": "Rust",
            "Detail": "Write a CLI"
        }]);

        let mapping = SchemaKind::Auto.resolve(&doc);
        assert_eq!(mapping, FieldMapping::upwork());

        let jobs = mapping.map_document(&doc).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_number(), Some("42"));
        assert_eq!(jobs[0].page_link(), Some("https://example.com/42"));
        assert_eq!(jobs[0].posted(), PostedTime::Relative { minutes: 8 });
        assert_eq!(jobs[0].estimated_time(), Some("Less than 1 month"));
    }

    #[test]
    fn test_simple_schema_auto_detected() {
        let doc = json!([{
            "title": "Designer",
            "posted": "2 hours ago",
            "type": "Fixed",
            "level": "Entry",
            "skill": "Figma",
            "detail": "Logo"
        }]);

        let mapping = SchemaKind::Auto.resolve(&doc);
        assert_eq!(mapping, FieldMapping::simple());

        let jobs = mapping.map_document(&doc).unwrap();
        assert_eq!(jobs[0].title(), "Designer");
        assert_eq!(jobs[0].job_type(), "Fixed");
        assert!(jobs[0].job_number().is_none());
    }

    #[test]
    fn test_not_an_array() {
        let err = FieldMapping::simple()
            .map_document(&json!({"title": "x"}))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAnArray));
    }

    #[test]
    fn test_record_not_object() {
        let err = FieldMapping::simple()
            .map_document(&json!(["just a string"]))
            .unwrap_err();
        assert!(matches!(err, DomainError::RecordNotObject { index: 0 }));
    }

    #[test]
    fn test_missing_required_field() {
        let doc = json!([{
            "title": "Designer",
            "posted": "2 hours ago",
            "type": "Fixed",
            "level": "Entry",
            "detail": "Logo"
        }]);

        let err = FieldMapping::simple().map_document(&doc).unwrap_err();
        match err {
            DomainError::MissingField { index, key } => {
                assert_eq!(index, 0);
                assert_eq!(key, "skill");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_array_and_object_values() {
        let doc = json!([{
            "title": "Designer",
            "posted": null,
            "type": "Fixed",
            "level": "Entry",
            "skill": ["Figma", "Sketch"],
            "detail": "Logo"
        }]);

        let jobs = FieldMapping::simple().map_document(&doc).unwrap();
        assert_eq!(jobs[0].posted_raw(), "");
        assert_eq!(jobs[0].posted(), PostedTime::Unparsed);
        assert_eq!(jobs[0].skill(), "Figma, Sketch");

        let bad = json!([{
            "title": "Designer",
            "posted": "1 day ago",
            "type": "Fixed",
            "level": {"name": "Entry"},
            "skill": "Figma",
            "detail": "Logo"
        }]);
        let err = FieldMapping::simple().map_document(&bad).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { index: 0, .. }));
    }

    #[test]
    fn test_custom_mapping_from_json() {
        let mapping: FieldMapping = serde_json::from_value(json!({
            "title": "name",
            "posted": "when",
            "type": "kind",
            "level": "seniority",
            "skill": "stack",
            "detail": "body"
        }))
        .unwrap();

        let doc = json!([{
            "name": "Backend",
            "when": "3 days ago",
            "kind": "Hourly",
            "seniority": "Intermediate",
            "stack": "Go",
            "body": "APIs"
        }]);

        let jobs = mapping.map_document(&doc).unwrap();
        assert_eq!(jobs[0].level(), "Intermediate");
        assert_eq!(jobs[0].posted(), PostedTime::Relative { minutes: 4320 });
    }

    #[test]
    fn test_schema_kind_from_str() {
        assert_eq!("UPWORK".parse::<SchemaKind>(), Ok(SchemaKind::Upwork));
        assert_eq!("simple".parse::<SchemaKind>(), Ok(SchemaKind::Simple));
        assert!("xml".parse::<SchemaKind>().is_err());
    }
}

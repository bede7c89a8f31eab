// Local file job source (user-selected JSON file)
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use jobboard_core::error::{AppError, Result};
use jobboard_core::port::JobSource;

/// Accepted file extension (compared case-insensitively)
const JSON_EXTENSION: &str = "json";

/// Reads the job document from disk.
///
/// Only `.json` files are accepted, the local stand-in for the browser's
/// `application/json` MIME check.
pub struct FileJobSource {
    path: PathBuf,
}

impl FileJobSource {
    /// `~` at the start of `path` is expanded to the home directory
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path).into_owned()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_file_type(&self) -> Result<()> {
        let is_json = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION));

        if is_json {
            Ok(())
        } else {
            Err(AppError::InvalidFileType {
                path: self.path.display().to_string(),
            })
        }
    }
}

#[async_trait]
impl JobSource for FileJobSource {
    async fn fetch(&self) -> Result<serde_json::Value> {
        self.check_file_type()?;

        debug!(path = %self.path.display(), "Reading job document");
        let bytes = tokio::fs::read(&self.path).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jobboard_file_source_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_json_file() {
        let path = temp_file("jobs.json", r#"[{"title":"Local"}]"#);
        let source = FileJobSource::new(path.to_str().unwrap());

        let document = source.fetch().await.unwrap();
        assert_eq!(document[0]["title"], "Local");
    }

    #[tokio::test]
    async fn test_uppercase_extension_accepted() {
        let path = temp_file("upwork_jobs.JSON", "[]");
        let source = FileJobSource::new(path.to_str().unwrap());
        assert!(source.fetch().await.unwrap().as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_non_json_extension() {
        let path = temp_file("jobs.csv", "title\nLocal");
        let source = FileJobSource::new(path.to_str().unwrap());

        assert!(matches!(
            source.fetch().await,
            Err(AppError::InvalidFileType { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let path = temp_file("broken.json", "[{");
        let source = FileJobSource::new(path.to_str().unwrap());
        assert!(matches!(
            source.fetch().await,
            Err(AppError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = FileJobSource::new("/definitely/not/here/jobs.json");
        assert!(matches!(source.fetch().await, Err(AppError::Io(_))));
    }

    #[test]
    fn test_tilde_expansion() {
        let source = FileJobSource::new("~/jobs.json");
        assert!(!source.path().starts_with("~"));
        assert!(source.path().ends_with("jobs.json"));
    }
}

// Job Source Port - where the raw job document comes from
use crate::error::Result;
use async_trait::async_trait;

/// Data source for the job document (remote URL, local file, ...)
///
/// The only suspending operation in the system. Implementations return the
/// parsed JSON document; turning it into records is the core's job.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch and parse the document
    ///
    /// # Errors
    /// - `AppError::Fetch` / `AppError::HttpStatus` for network failures
    /// - `AppError::InvalidFileType` for non-JSON local files
    /// - `AppError::Io` / `AppError::Serialization` for unreadable or malformed content
    async fn fetch(&self) -> Result<serde_json::Value>;

    /// Human-readable origin, for logs and messages
    fn describe(&self) -> String;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;

    /// Source returning a fixed document
    pub struct StaticJobSource {
        document: serde_json::Value,
    }

    impl StaticJobSource {
        pub fn new(document: serde_json::Value) -> Self {
            Self { document }
        }
    }

    #[async_trait]
    impl JobSource for StaticJobSource {
        async fn fetch(&self) -> Result<serde_json::Value> {
            Ok(self.document.clone())
        }

        fn describe(&self) -> String {
            "static document".to_string()
        }
    }

    /// Source that always fails with a fetch error
    pub struct FailingJobSource;

    #[async_trait]
    impl JobSource for FailingJobSource {
        async fn fetch(&self) -> Result<serde_json::Value> {
            Err(AppError::Fetch("connection refused".to_string()))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }
}

// Domain Layer - Pure business logic and entities

pub mod constants;
pub mod error;
pub mod job;
pub mod posted;
pub mod schema;

// Re-exports
pub use error::DomainError;
pub use job::{JobRecord, JobRecordBuilder};
pub use posted::{normalize, PostedTime};
pub use schema::{FieldMapping, SchemaChoice, SchemaKind};

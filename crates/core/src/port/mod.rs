// Port Layer - Interfaces for external collaborators

pub mod job_source;
pub mod presenter;
pub mod time_provider;

// Re-exports
pub use job_source::JobSource;
pub use presenter::Presenter;
pub use time_provider::TimeProvider;

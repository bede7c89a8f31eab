// Job Board Infrastructure - Job Source Adapters
// Implements: JobSource over HTTP (reqwest) and local files (tokio::fs)

mod file_source;
mod http_source;

pub use file_source::FileJobSource;
pub use http_source::HttpJobSource;

// Application Layer - Use cases over the in-memory job collection

pub mod board;
pub mod filter;
pub mod options;
pub mod sort;
pub mod store;
pub mod view;

// Re-exports
pub use board::JobBoard;
pub use filter::{filter, FilterCriteria};
pub use options::FilterOptions;
pub use sort::{locale_compare, sort, Direction, Precedence, SortOrder};
pub use store::CollectionStore;
pub use view::View;

pub mod error;
pub mod scope_filter;
pub mod types;

pub use error::FilterError;
pub use scope_filter::ScopeFilter;
pub use types::SqlPredicate;

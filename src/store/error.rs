use thiserror::Error;

/// Errors from the user/role directory stores.
///
/// "No hierarchy found" conditions are never represented here — lookups
/// return `Option`/empty collections and callers fail closed. Only genuine
/// infrastructure failures surface as `StoreError`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Directory store unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

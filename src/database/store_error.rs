/// Failure of the storage layer. "Nothing found" is never a `StoreError`: lookups return an empty
/// collection or `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity or query failure reported by the database driver.
    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),
    /// A stored record cannot be decoded or a record cannot be encoded for storage.
    #[error("Stored record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

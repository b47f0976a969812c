//! Error types for solarlead-store

use thiserror::Error;

/// Result type alias for solarlead-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in solarlead-store
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A record addressed by id does not exist
    #[error("{kind} {id} not found")]
    NotFound {
        /// Record kind, e.g. "FAQ"
        kind: &'static str,
        /// Requested id
        id: i64,
    },

    /// A stored row could not be mapped back to a record
    #[error("Corrupt {table} row {id}: {reason}")]
    CorruptRow {
        /// Table name
        table: &'static str,
        /// Row id
        id: i64,
        /// What was wrong
        reason: String,
    },
}

impl StoreError {
    /// Returns whether the failure is about reaching the store rather than
    /// about the request itself.
    ///
    /// Pool exhaustion, a closed pool and I/O failures are transient; the
    /// caller may report "try again later".
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::Database(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

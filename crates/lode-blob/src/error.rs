//! Error taxonomy of the blob façade.
//!
//! Two kinds, deliberately: precondition violations surface before any store
//! access, and every storage-level failure collapses into a single variant so
//! callers never branch on backend details. The underlying [`StoreError`] is
//! kept as the source for diagnostics only.

use lode_store::StoreError;

/// Errors surfaced by blob content loading and diffing.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A caller-supplied argument violated a precondition. Raised before
    /// any store access; never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store could not produce content for a requested id: not found,
    /// wrong object kind, too large to materialize, or backend I/O failure.
    #[error("cannot access stored content: {0}")]
    Storage(#[source] StoreError),
}

/// Result alias for blob operations.
pub type BlobResult<T> = Result<T, BlobError>;

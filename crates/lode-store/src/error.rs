use lode_types::{IdPrefix, ObjectId};

use crate::object::ObjectKind;

/// Errors from object store operations.
///
/// These are the lower-level failure signals a storage backend can raise.
/// Callers going through `lode-blob` never see them directly: the blob layer
/// collapses every variant into its single storage-access error kind.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The object exists but has a different kind than requested.
    #[error("kind mismatch for {id}: expected {expected}, got {actual}")]
    KindMismatch {
        id: ObjectId,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    /// The object exceeds the backend's eager-load size limit.
    #[error("object {id} is too large to materialize: {size} bytes (limit {limit})")]
    TooLarge { id: ObjectId, size: u64, limit: u64 },

    /// No stored object id starts with the given prefix.
    #[error("no object matches prefix {0}")]
    PrefixNotFound(IdPrefix),

    /// More than one stored object id starts with the given prefix.
    #[error("ambiguous prefix {0}")]
    AmbiguousPrefix(IdPrefix),

    /// Attempted to write an object hashing to the zero ID.
    #[error("cannot store object with the zero ID")]
    ZeroObjectId,

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

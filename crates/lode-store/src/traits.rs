use lode_types::{IdPrefix, ObjectId};

use crate::error::StoreResult;
use crate::object::StoredObject;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees this:
///   the same data always produces the same ID.
/// - Concurrent reads are always safe (objects are immutable).
/// - The store never interprets object contents -- it is a pure key-value store.
/// - Reads are eager: `read` returns the fully materialized object or fails.
///   A backend with a size limit fails the read rather than truncating.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object by its content-addressed ID.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    /// Returns `Err` on I/O failure or when the object cannot be fully
    /// materialized (e.g., it exceeds the backend's eager-load limit).
    fn read(&self, id: &ObjectId) -> StoreResult<Option<StoredObject>>;

    /// Write an object and return its content-addressed ID.
    ///
    /// If the object already exists, this is a no-op (idempotent).
    /// The returned ID is computed from the object's kind and data.
    fn write(&self, object: &StoredObject) -> StoreResult<ObjectId>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &ObjectId) -> StoreResult<bool>;

    /// Delete an object by ID. Returns `true` if the object existed.
    ///
    /// This is intended for garbage collection only. Deletion of
    /// referenced objects can corrupt the store.
    fn delete(&self, id: &ObjectId) -> StoreResult<bool>;

    /// Resolve an abbreviated ID to the full ID of a stored object.
    ///
    /// Returns `Ok(None)` if no object id starts with the prefix, and
    /// `Err(StoreError::AmbiguousPrefix)` if more than one does.
    fn resolve_prefix(&self, prefix: &IdPrefix) -> StoreResult<Option<ObjectId>>;
}

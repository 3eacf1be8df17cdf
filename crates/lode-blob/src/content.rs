//! Content loading: resolve an object id to fully materialized blob bytes.

use lode_store::{Blob, ObjectStore, StoreError};
use lode_types::{IdPrefix, ObjectId};
use tracing::debug;

use crate::error::{BlobError, BlobResult};

/// Load the raw bytes of the blob identified by `id`.
///
/// The store read is eager: the result is the complete content or an error.
/// Every storage-level failure (the object is missing, has a non-blob kind,
/// or is too large for the backend to materialize) surfaces as
/// [`BlobError::Storage`] with the cause attached.
///
/// The zero id is not special-cased here: it identifies no stored object and
/// fails like any other miss. (The differ, by contrast, treats a zero id as
/// an absent side.)
pub fn get_content(store: &dyn ObjectStore, id: &ObjectId) -> BlobResult<Vec<u8>> {
    let obj = store
        .read(id)
        .map_err(BlobError::Storage)?
        .ok_or_else(|| BlobError::Storage(StoreError::NotFound(*id)))?;
    let blob = Blob::from_stored_object(&obj).map_err(BlobError::Storage)?;
    debug!(id = %id.short_hex(), size = blob.data.len(), "blob loaded");
    Ok(blob.data)
}

/// Resolve id text, either full hex or an abbreviated prefix, to an [`ObjectId`].
///
/// Malformed text fails with [`BlobError::InvalidArgument`] before any store
/// access. Full-length hex parses directly; shorter prefixes are resolved
/// against the store, where a miss or an ambiguous match surfaces as
/// [`BlobError::Storage`].
pub fn resolve(store: &dyn ObjectStore, text: &str) -> BlobResult<ObjectId> {
    let prefix =
        IdPrefix::from_hex(text).map_err(|e| BlobError::InvalidArgument(e.to_string()))?;
    if let Some(id) = prefix.to_id() {
        return Ok(id);
    }
    match store.resolve_prefix(&prefix).map_err(BlobError::Storage)? {
        Some(id) => Ok(id),
        None => Err(BlobError::Storage(StoreError::PrefixNotFound(prefix))),
    }
}

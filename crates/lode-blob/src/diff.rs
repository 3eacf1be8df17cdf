//! Blob diffing: line-level edit scripts between two stored blob versions.
//!
//! A zero object id on either side means "absent content" at that revision;
//! that side contributes an empty line sequence without touching the store.
//! Binary content on either real side suppresses the diff entirely: the
//! result is an empty script, not an error.

use lode_store::ObjectStore;
use lode_types::ObjectId;
use tracing::debug;

use crate::comparator::{Comparator, TextComparator};
use crate::content::get_content;
use crate::edit::EditScript;
use crate::error::BlobResult;

/// How many leading bytes the NUL scan inspects, matching git's heuristic.
const BINARY_SCAN_LIMIT: usize = 8000;

/// Classify content as binary: a NUL byte within the scanned window, or
/// bytes that do not form valid UTF-8 text.
pub fn is_binary(data: &[u8]) -> bool {
    as_text(data).is_none()
}

fn as_text(data: &[u8]) -> Option<&str> {
    if data.iter().take(BINARY_SCAN_LIMIT).any(|&b| b == 0) {
        return None;
    }
    std::str::from_utf8(data).ok()
}

/// Diff two blobs with the default comparator.
///
/// See [`diff_with`] for the full contract.
pub fn diff(
    store: &dyn ObjectStore,
    old_id: &ObjectId,
    new_id: &ObjectId,
) -> BlobResult<EditScript> {
    diff_with(store, old_id, new_id, &TextComparator::default())
}

/// Diff two blobs with an explicit comparator strategy.
///
/// - Both ids zero: empty script, no store access at all.
/// - A zero id contributes empty content; a real id is loaded with
///   [`get_content`] semantics, so any storage failure propagates as
///   [`BlobError::Storage`](crate::BlobError::Storage).
/// - If either real side is binary the result is the empty script.
/// - Otherwise both sides are split into lines and handed to `comparator`.
///
/// For fixed inputs and a fixed comparator the script is exactly
/// reproducible.
pub fn diff_with(
    store: &dyn ObjectStore,
    old_id: &ObjectId,
    new_id: &ObjectId,
    comparator: &dyn Comparator,
) -> BlobResult<EditScript> {
    if old_id.is_zero() && new_id.is_zero() {
        return Ok(EditScript::new());
    }

    let old_bytes = side_content(store, old_id)?;
    let new_bytes = side_content(store, new_id)?;

    // A zero-id side is empty and therefore always text; a real side may
    // still be binary and suppress the whole diff.
    let (old_text, new_text) = match (as_text(&old_bytes), as_text(&new_bytes)) {
        (Some(old), Some(new)) => (old, new),
        _ => {
            debug!(
                old = %old_id.short_hex(),
                new = %new_id.short_hex(),
                "binary content, diff suppressed"
            );
            return Ok(EditScript::new());
        }
    };

    Ok(comparator.compare(old_text, new_text))
}

fn side_content(store: &dyn ObjectStore, id: &ObjectId) -> BlobResult<Vec<u8>> {
    if id.is_zero() {
        Ok(Vec::new())
    } else {
        get_content(store, id)
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use lode_types::{IdPrefix, ObjectId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock` for safe concurrent access. Objects are cloned on read/write.
///
/// An optional eager-load limit can be set with
/// [`with_max_object_size`](Self::with_max_object_size): reads of objects
/// larger than the limit fail with [`StoreError::TooLarge`] instead of
/// materializing the bytes.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectId, StoredObject>>,
    max_object_size: Option<u64>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store with no size limit.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            max_object_size: None,
        }
    }

    /// Create a store whose reads fail for objects larger than `limit` bytes.
    pub fn with_max_object_size(limit: u64) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            max_object_size: Some(limit),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored objects.
    pub fn total_bytes(&self) -> u64 {
        self.objects
            .read()
            .expect("lock poisoned")
            .values()
            .map(|obj| obj.size)
            .sum()
    }

    /// Remove all objects from the store.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all object IDs in the store.
    pub fn all_ids(&self) -> Vec<ObjectId> {
        let map = self.objects.read().expect("lock poisoned");
        let mut ids: Vec<ObjectId> = map.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn read(&self, id: &ObjectId) -> StoreResult<Option<StoredObject>> {
        let map = self.objects.read().expect("lock poisoned");
        match map.get(id) {
            Some(obj) => {
                if let Some(limit) = self.max_object_size {
                    if obj.size > limit {
                        return Err(StoreError::TooLarge {
                            id: *id,
                            size: obj.size,
                            limit,
                        });
                    }
                }
                Ok(Some(obj.clone()))
            }
            None => Ok(None),
        }
    }

    fn write(&self, object: &StoredObject) -> StoreResult<ObjectId> {
        let id = object.compute_id();
        if id.is_zero() {
            return Err(StoreError::ZeroObjectId);
        }
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: if already present, skip (content-addressing guarantees
        // the same ID always maps to the same content).
        map.entry(id).or_insert_with(|| object.clone());
        debug!(id = %id.short_hex(), kind = %object.kind, size = object.size, "object written");
        Ok(id)
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }

    fn delete(&self, id: &ObjectId) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        let existed = map.remove(id).is_some();
        if existed {
            debug!(id = %id.short_hex(), "object deleted");
        }
        Ok(existed)
    }

    fn resolve_prefix(&self, prefix: &IdPrefix) -> StoreResult<Option<ObjectId>> {
        // Scan in sorted order so resolution is deterministic.
        let mut matched = None;
        for id in self.all_ids() {
            if prefix.matches(&id) {
                if matched.is_some() {
                    return Err(StoreError::AmbiguousPrefix(prefix.clone()));
                }
                matched = Some(id);
            }
        }
        Ok(matched)
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .field("max_object_size", &self.max_object_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Blob, ObjectKind};

    fn make_blob(content: &[u8]) -> StoredObject {
        Blob::new(content.to_vec()).to_stored_object()
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn write_and_read_blob() {
        let store = InMemoryObjectStore::new();
        let obj = make_blob(b"hello world");
        let id = store.write(&obj).unwrap();
        assert!(!id.is_zero());

        let read_back = store.read(&id).unwrap().expect("should exist");
        assert_eq!(read_back, obj);
    }

    #[test]
    fn write_and_read_tree_kind() {
        let store = InMemoryObjectStore::new();
        let obj = StoredObject::new(ObjectKind::Tree, b"raw tree listing".to_vec());
        let id = store.write(&obj).unwrap();

        let read_back = store.read(&id).unwrap().expect("should exist");
        assert_eq!(read_back.kind, ObjectKind::Tree);
    }

    #[test]
    fn read_missing_object_returns_none() {
        let store = InMemoryObjectStore::new();
        let id = ObjectId::from_bytes(b"missing");
        assert!(store.read(&id).unwrap().is_none());
    }

    #[test]
    fn read_zero_id_returns_none() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"something")).unwrap();
        assert!(store.read(&ObjectId::zero()).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Content-addressing correctness
    // -----------------------------------------------------------------------

    #[test]
    fn same_content_produces_same_id() {
        let store = InMemoryObjectStore::new();
        let id1 = store.write(&make_blob(b"identical content")).unwrap();
        let id2 = store.write(&make_blob(b"identical content")).unwrap();
        assert_eq!(id1, id2);
        // Only one object stored (dedup)
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_produces_different_ids() {
        let store = InMemoryObjectStore::new();
        let id1 = store.write(&make_blob(b"aaa")).unwrap();
        let id2 = store.write(&make_blob(b"bbb")).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn write_is_idempotent() {
        let store = InMemoryObjectStore::new();
        let obj = make_blob(b"idempotent");
        let id1 = store.write(&obj).unwrap();
        let id2 = store.write(&obj).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Eager-load size limit
    // -----------------------------------------------------------------------

    #[test]
    fn read_over_limit_fails() {
        let store = InMemoryObjectStore::with_max_object_size(4);
        let id = store.write(&make_blob(b"12345678")).unwrap();
        let err = store.read(&id).unwrap_err();
        assert!(matches!(
            err,
            StoreError::TooLarge { size: 8, limit: 4, .. }
        ));
    }

    #[test]
    fn read_under_limit_succeeds() {
        let store = InMemoryObjectStore::with_max_object_size(16);
        let id = store.write(&make_blob(b"tiny")).unwrap();
        assert!(store.read(&id).unwrap().is_some());
    }

    // -----------------------------------------------------------------------
    // Exists / Delete
    // -----------------------------------------------------------------------

    #[test]
    fn exists_for_missing_object() {
        let store = InMemoryObjectStore::new();
        let id = ObjectId::from_bytes(b"nonexistent");
        assert!(!store.exists(&id).unwrap());
    }

    #[test]
    fn exists_for_present_object() {
        let store = InMemoryObjectStore::new();
        let id = store.write(&make_blob(b"present")).unwrap();
        assert!(store.exists(&id).unwrap());
    }

    #[test]
    fn delete_present_object() {
        let store = InMemoryObjectStore::new();
        let id = store.write(&make_blob(b"to-delete")).unwrap();
        assert!(store.delete(&id).unwrap()); // was present
        assert!(!store.exists(&id).unwrap()); // now gone
        assert!(!store.delete(&id).unwrap()); // second delete = false
    }

    // -----------------------------------------------------------------------
    // Prefix resolution
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_unique_prefix() {
        let store = InMemoryObjectStore::new();
        let id = store.write(&make_blob(b"prefix target")).unwrap();
        let prefix = IdPrefix::from_hex(&id.to_hex()[..12]).unwrap();
        assert_eq!(store.resolve_prefix(&prefix).unwrap(), Some(id));
    }

    #[test]
    fn resolve_missing_prefix() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"something")).unwrap();
        // The store holds one id; find a prefix that cannot match it.
        let held = store.all_ids()[0].to_hex();
        let first = if held.starts_with('0') { "ffff" } else { "0000" };
        let prefix = IdPrefix::from_hex(first).unwrap();
        assert_eq!(store.resolve_prefix(&prefix).unwrap(), None);
    }

    #[test]
    fn resolve_ambiguous_prefix() {
        let store = InMemoryObjectStore::new();
        // Write objects until two ids share a one-nibble prefix, then ask
        // with the shortest valid prefix of one of them.
        let mut ids: Vec<ObjectId> = Vec::new();
        let mut i: u32 = 0;
        let (a, b) = loop {
            let id = store.write(&make_blob(format!("filler-{i}").as_bytes())).unwrap();
            if let Some(prev) = ids.iter().find(|p| p.to_hex()[..4] == id.to_hex()[..4]) {
                break (*prev, id);
            }
            ids.push(id);
            i += 1;
        };
        assert_eq!(a.to_hex()[..4], b.to_hex()[..4]);
        let prefix = IdPrefix::from_hex(&a.to_hex()[..4]).unwrap();
        let err = store.resolve_prefix(&prefix).unwrap_err();
        assert!(matches!(err, StoreError::AmbiguousPrefix(_)));
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.write(&make_blob(b"a")).unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn total_bytes() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"12345")).unwrap(); // 5 bytes
        store.write(&make_blob(b"123456789")).unwrap(); // 9 bytes
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"a")).unwrap();
        store.write(&make_blob(b"b")).unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn all_ids_is_sorted() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"aaa")).unwrap();
        store.write(&make_blob(b"bbb")).unwrap();
        store.write(&make_blob(b"ccc")).unwrap();

        let ids = store.all_ids();
        assert_eq!(ids.len(), 3);
        for w in ids.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let obj = make_blob(b"shared data");
        let id = store.write(&obj).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let expected_id = id;
                thread::spawn(move || {
                    let result = store.read(&expected_id).unwrap();
                    let read_obj = result.expect("object should exist");
                    assert_eq!(read_obj.compute_id(), expected_id);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Debug / Default
    // -----------------------------------------------------------------------

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryObjectStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}

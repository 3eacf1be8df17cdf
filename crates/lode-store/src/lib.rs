//! Content-addressed object storage for Lode.
//!
//! This crate implements a hash-keyed object store analogous to git's
//! `.git/objects/` directory. Every piece of data is stored as an immutable
//! object identified by its BLAKE3 hash (domain-separated by object kind).
//!
//! # Object Types
//!
//! - [`Blob`] -- raw content (file contents, arbitrary data)
//! - A `Tree` kind tag is reserved for directory listings; the store itself
//!   never interprets object contents
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. Concurrent reads are always safe (objects are immutable).
//! 3. The store never interprets object contents -- it is a pure key-value
//!    store keyed by content hash.
//! 4. All I/O errors are propagated, never silently ignored.
//! 5. Reads are eager: an object either materializes fully or the read fails.

pub mod error;
pub mod hash;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use hash::ContentHasher;
pub use memory::InMemoryObjectStore;
pub use object::{Blob, ObjectKind, StoredObject};
pub use traits::ObjectStore;

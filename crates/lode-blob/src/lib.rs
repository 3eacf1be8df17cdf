//! Blob retrieval and diffing for Lode object stores.
//!
//! This crate is a thin façade over an [`ObjectStore`](lode_store::ObjectStore):
//! it loads a blob's raw bytes by object id and computes a line-level edit
//! script between two blob versions. The zero object id is understood as
//! "absent content" by the differ, and binary content suppresses diffing
//! entirely.
//!
//! # Key Types
//!
//! - [`get_content`] / [`resolve`] -- Content loading and id resolution
//! - [`diff`] / [`diff_with`] -- Line-level blob comparison
//! - [`Edit`] / [`EditKind`] / [`EditScript`] -- The edit script model
//! - [`Comparator`] / [`TextComparator`] -- Pluggable diff strategy
//! - [`BlobError`] -- The two-kind error taxonomy of this façade

pub mod comparator;
pub mod content;
pub mod diff;
pub mod edit;
pub mod error;

pub use comparator::{Comparator, DiffAlgorithm, TextComparator};
pub use content::{get_content, resolve};
pub use diff::{diff, diff_with, is_binary};
pub use edit::{Edit, EditKind, EditScript};
pub use error::{BlobError, BlobResult};

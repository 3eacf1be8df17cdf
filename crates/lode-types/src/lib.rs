//! Foundation types for Lode.
//!
//! This crate provides the identifier types used throughout the Lode object
//! store. Every other Lode crate depends on `lode-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] -- Content-addressed identifier (BLAKE3 hash); the all-zero
//!   value is a sentinel meaning "no object"
//! - [`IdPrefix`] -- Validated abbreviated (hex prefix) form of an object id
//! - [`TypeError`] -- Parse and validation failures

pub mod error;
pub mod object;

pub use error::TypeError;
pub use object::{IdPrefix, ObjectId};

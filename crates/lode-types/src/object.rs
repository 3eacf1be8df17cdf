use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content-addressed identifier for a stored object.
///
/// An `ObjectId` is the BLAKE3 hash of an object's content. Identical content
/// always produces the same `ObjectId`, making objects deduplicatable and
/// verifiable. The all-zero value is reserved as a sentinel meaning
/// "no object" and never identifies stored content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId([u8; 32]);

impl ObjectId {
    /// Compute an `ObjectId` from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create an `ObjectId` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The zero object ID (all zeros). A sentinel meaning "no object".
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the zero object ID.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a full-length hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.short_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for ObjectId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for [u8; 32] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

/// Abbreviated (prefix) form of an [`ObjectId`].
///
/// A validated lowercase hex prefix between [`IdPrefix::MIN_LEN`] and
/// [`IdPrefix::MAX_LEN`] characters. A full-length prefix converts directly
/// to an `ObjectId`; shorter prefixes must be resolved against a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdPrefix {
    hex: String,
}

impl IdPrefix {
    /// Minimum accepted prefix length in hex characters.
    pub const MIN_LEN: usize = 4;
    /// Maximum prefix length: a full hex-encoded object id.
    pub const MAX_LEN: usize = 64;

    /// Parse and validate a hex prefix.
    ///
    /// Input is lowercased. Rejects non-hex characters and lengths outside
    /// `MIN_LEN..=MAX_LEN`.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() < Self::MIN_LEN || s.len() > Self::MAX_LEN {
            return Err(TypeError::PrefixLength {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: s.len(),
            });
        }
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidHex(s.to_string()));
        }
        Ok(Self {
            hex: s.to_ascii_lowercase(),
        })
    }

    /// The prefix as lowercase hex text.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Number of hex characters in the prefix.
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    /// Always `false`: prefixes shorter than `MIN_LEN` are rejected at parse.
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// Returns `true` if `id` starts with this prefix.
    pub fn matches(&self, id: &ObjectId) -> bool {
        id.to_hex().starts_with(&self.hex)
    }

    /// Convert to a full `ObjectId` if the prefix is full-length.
    pub fn to_id(&self) -> Option<ObjectId> {
        if self.hex.len() == Self::MAX_LEN {
            ObjectId::from_hex(&self.hex).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

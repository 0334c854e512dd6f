//! Hash map objects.
//!
//! Pairs are stored in insertion order and indexed by the key's
//! [`HashKey`], so rendering is deterministic.

use std::fmt;
use std::hash::Hasher;

use rustc_hash::{FxHashMap, FxHasher};

use super::{Object, ObjectKind};

/// Hash code of a hashable object, tagged with its kind so `1` and `true`
/// never collide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: ObjectKind,
    pub value: u64,
}

impl HashKey {
    /// An integer's hash code is its own bit pattern.
    pub fn integer(value: i64) -> Self {
        HashKey {
            kind: ObjectKind::Integer,
            value: u64::from_ne_bytes(value.to_ne_bytes()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        HashKey {
            kind: ObjectKind::Boolean,
            value: u64::from(value),
        }
    }

    pub fn string(value: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write(value.as_bytes());
        HashKey {
            kind: ObjectKind::String,
            value: hasher.finish(),
        }
    }
}

/// A key object and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Ordered hash map from [`HashKey`] to key/value pairs.
#[derive(Clone, Debug, Default)]
pub struct HashObject {
    pairs: Vec<HashPair>,
    index: FxHashMap<HashKey, usize>,
}

impl HashObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. An existing key keeps its position and takes the new
    /// key object and value.
    pub fn insert(&mut self, hash_key: HashKey, key: Object, value: Object) {
        let pair = HashPair { key, value };
        if let Some(&slot) = self.index.get(&hash_key) {
            self.pairs[slot] = pair;
        } else {
            self.index.insert(hash_key, self.pairs.len());
            self.pairs.push(pair);
        }
    }

    pub fn get(&self, hash_key: &HashKey) -> Option<&HashPair> {
        self.index.get(hash_key).and_then(|&slot| self.pairs.get(slot))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HashPair> {
        self.pairs.iter()
    }
}

impl PartialEq for HashObject {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str("}")
    }
}

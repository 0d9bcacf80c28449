//! # Attribute Container
//!
//! Per-index typed attribute storage for vertex metadata.
//!
//! An attribute must be registered with a default value before it can be
//! set on any key; the default's kind fixes the attribute's declared type.
//! Keys live in the same dense index space as the vertex store: `add_keys`
//! and `delete_key` are driven by vertex lifecycle, and deleting a key
//! shifts every higher key down by one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// VALUES & KINDS
// =============================================================================

/// The declared type of an attribute.
///
/// Derived from the registered default's variant; `set_attr` rejects values
/// of any other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttrKind {
    /// Boolean flag.
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// UTF-8 string.
    Str,
    /// Raw bytes.
    Bytes,
}

/// A typed attribute value.
///
/// The closed set of value shapes the container accepts. Integer-only, per
/// the crate-wide determinism constraints.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// UTF-8 string.
    Str(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl AttrValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> AttrKind {
        match self {
            Self::Bool(_) => AttrKind::Bool,
            Self::Int(_) => AttrKind::Int,
            Self::UInt(_) => AttrKind::UInt,
            Self::Str(_) => AttrKind::Str,
            Self::Bytes(_) => AttrKind::Bytes,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the attribute container.
///
/// All are structural preconditions checked at the public boundary; none
/// are retried internally, none leave partial mutation behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// The attribute name was never registered via `new_attr`.
    #[error("no attribute registered under name: {0}")]
    NoAttribute(String),

    /// The key is outside the container's dense key range.
    #[error("no attribute key: {0}")]
    NoKey(usize),

    /// The value's kind does not match the kind fixed at registration.
    #[error("wrong type for attribute {name}: expected {expected:?}, got {got:?}")]
    WrongType {
        /// The attribute being set.
        name: String,
        /// The kind fixed by the registered default.
        expected: AttrKind,
        /// The kind of the rejected value.
        got: AttrKind,
    },

    /// The attribute name is already registered.
    #[error("attribute already registered: {0}")]
    AlreadyRegistered(String),
}

// =============================================================================
// CONTAINER
// =============================================================================

/// Per-index attribute store.
///
/// Keys are dense: `[0, card)`. Each key holds only explicitly set values;
/// reads fall back to the registered default, so registering an attribute
/// after keys exist makes the default visible on all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeContainer {
    /// Registered attribute name -> default value (fixes the kind).
    defaults: BTreeMap<String, AttrValue>,
    /// Per-key overrides, sparse. Index space shared with the vertex store.
    slots: Vec<BTreeMap<String, AttrValue>>,
}

impl AttributeContainer {
    /// Create a new empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn card(&self) -> usize {
        self.slots.len()
    }

    /// Check whether an attribute name is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Registered attribute names in deterministic order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    /// The default value registered for `name`.
    pub fn default_of(&self, name: &str) -> Result<&AttrValue, AttributeError> {
        self.defaults
            .get(name)
            .ok_or_else(|| AttributeError::NoAttribute(name.to_string()))
    }

    /// Register an attribute with its default value.
    ///
    /// The default's kind becomes the attribute's declared type. Existing
    /// keys read the default until a value is set on them.
    pub fn new_attr(
        &mut self,
        name: impl Into<String>,
        default: AttrValue,
    ) -> Result<(), AttributeError> {
        let name = name.into();
        if self.defaults.contains_key(&name) {
            return Err(AttributeError::AlreadyRegistered(name));
        }
        self.defaults.insert(name, default);
        Ok(())
    }

    /// Get the value of `name` on `key`.
    ///
    /// Returns the set value, or the registered default if the key was
    /// never written.
    pub fn get(&self, key: usize, name: &str) -> Result<&AttrValue, AttributeError> {
        let default = self.default_of(name)?;
        let slot = self.slots.get(key).ok_or(AttributeError::NoKey(key))?;
        Ok(slot.get(name).unwrap_or(default))
    }

    /// Iterate over `(name, value)` for every registered attribute on `key`.
    pub fn get_all(
        &self,
        key: usize,
    ) -> Result<impl Iterator<Item = (&str, &AttrValue)>, AttributeError> {
        let slot = self.slots.get(key).ok_or(AttributeError::NoKey(key))?;
        Ok(self
            .defaults
            .iter()
            .map(move |(name, default)| (name.as_str(), slot.get(name).unwrap_or(default))))
    }

    /// Set the value of `name` on `key`.
    ///
    /// The name must be registered and the value's kind must match the
    /// registered default's kind.
    pub fn set_attr(
        &mut self,
        key: usize,
        name: &str,
        value: AttrValue,
    ) -> Result<(), AttributeError> {
        let expected = self.default_of(name)?.kind();
        if value.kind() != expected {
            return Err(AttributeError::WrongType {
                name: name.to_string(),
                expected,
                got: value.kind(),
            });
        }
        let slot = self.slots.get_mut(key).ok_or(AttributeError::NoKey(key))?;
        slot.insert(name.to_string(), value);
        Ok(())
    }

    /// Append `number` fresh keys, each reading every registered default.
    pub fn add_keys(&mut self, number: usize) {
        for _ in 0..number {
            self.slots.push(BTreeMap::new());
        }
    }

    /// Delete one key; every key above it shifts down by one.
    ///
    /// Kept consistent with vertex-store renumbering, since both share the
    /// same index space.
    pub fn delete_key(&mut self, key: usize) -> Result<(), AttributeError> {
        if key >= self.slots.len() {
            return Err(AttributeError::NoKey(key));
        }
        self.slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

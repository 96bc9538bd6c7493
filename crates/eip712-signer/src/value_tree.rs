//! [`ValueTree`]: the recursive shape that mirrors the schema (spec §3).
//!
//! Values are stored exactly as received from the host — raw bytes at the
//! leaves, never decoded — until the display layer (C10) or the validator
//! (C5) needs to interpret them.

use crate::Error;
use std::collections::BTreeMap;

/// A value tree mirroring a [`crate::TypeTable`] schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTree {
    /// A struct instance: member name to value.
    Struct(BTreeMap<String, ValueTree>),
    /// An array instance, elements in index order.
    Array(Vec<ValueTree>),
    /// An atomic or dynamic leaf value, exactly as received from the host.
    Leaf(Vec<u8>),
}

impl ValueTree {
    /// Creates an empty struct value.
    pub fn empty_struct() -> Self {
        ValueTree::Struct(BTreeMap::new())
    }

    /// Inserts a member into a struct value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not [`ValueTree::Struct`] — this is a
    /// programming error in the value collector, not a host-supplied
    /// condition, so it is not modeled as a recoverable [`Error`].
    pub fn insert_member(&mut self, name: impl Into<String>, value: ValueTree) {
        match self {
            ValueTree::Struct(map) => {
                map.insert(name.into(), value);
            }
            _ => panic!("insert_member called on a non-struct ValueTree"),
        }
    }

    /// Returns the member named `name` of a struct value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaError`] if `self` is not a struct, or the
    /// member is absent.
    pub fn member(&self, name: &str) -> Result<&ValueTree, Error> {
        match self {
            ValueTree::Struct(map) => map
                .get(name)
                .ok_or_else(|| Error::SchemaError(format!("missing value for member `{}`", name))),
            _ => Err(Error::SchemaError(format!(
                "expected struct value, found non-struct while looking up `{}`",
                name
            ))),
        }
    }

    /// Returns the elements of an array value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaError`] if `self` is not an array.
    pub fn as_array(&self) -> Result<&[ValueTree], Error> {
        match self {
            ValueTree::Array(elements) => Ok(elements),
            _ => Err(Error::SchemaError(
                "expected array value, found non-array".to_string(),
            )),
        }
    }

    /// Returns the raw bytes of a leaf value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaError`] if `self` is not a leaf.
    pub fn as_leaf(&self) -> Result<&[u8], Error> {
        match self {
            ValueTree::Leaf(bytes) => Ok(bytes),
            _ => Err(Error::SchemaError(
                "expected leaf value, found struct or array".to_string(),
            )),
        }
    }
}

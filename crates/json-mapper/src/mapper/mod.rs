//! Keyed, typed extraction from one node.
//!
//! Required single-value accessors live here; array and optional shapes are
//! in the `array` and `optional` submodules.

mod array;
mod optional;
mod strategy;

pub use strategy::{Converted, Nested, Plain, Raw, Strategy};

use json_mapper_node::{FromNode, NodeExt};
use serde_json::Value;

use crate::{Convertible, DecodeError, Mappable, RawRepresentable};

/// A read-only view over the node currently being decoded.
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    node: &'a Value,
}

impl<'a> Mapper<'a> {
    pub fn new(node: &'a Value) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &'a Value {
        self.node
    }

    pub fn contains(&self, key: &str) -> bool {
        self.node.child(key).is_some()
    }

    /// Decodes the value under `key` with strategy `S`.
    ///
    /// Fails with [`DecodeError::MissingKey`] when `key` is absent, otherwise
    /// with whatever `S` reports for the child node.
    pub fn get<S: Strategy<T>, T>(&self, key: &str) -> Result<T, DecodeError> {
        <S as Strategy<T>>::admit()?;
        let child = self
            .node
            .child(key)
            .ok_or_else(|| DecodeError::MissingKey(key.to_string()))?;
        <S as Strategy<T>>::decode(child)
    }

    /// Reads the value under `key` through the node's own typed extraction.
    pub fn get_plain<T: FromNode>(&self, key: &str) -> Result<T, DecodeError> {
        Ok(self.node.extract(key)?)
    }

    pub fn get_convertible<T: Convertible>(&self, key: &str) -> Result<T, DecodeError> {
        self.get::<Converted, T>(key)
    }

    /// Rejects raw types backed by the unrestricted integer before looking at `key`.
    pub fn get_raw<T: RawRepresentable>(&self, key: &str) -> Result<T, DecodeError> {
        self.get::<Raw, T>(key)
    }

    pub fn get_mappable<T: Mappable>(&self, key: &str) -> Result<T, DecodeError> {
        self.get::<Nested, T>(key)
    }
}

pub(crate) fn unwrap<T>(value: Option<T>) -> Result<T, DecodeError> {
    value.ok_or(DecodeError::CannotUnwrap)
}

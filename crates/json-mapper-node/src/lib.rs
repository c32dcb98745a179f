//! Interchange-node helpers for `json-mapper`.
//!
//! A node is a [`serde_json::Value`]. This crate answers two questions about
//! it: "is there a child under this key" ([`NodeExt::child`]) and "can this
//! node be read as `T`" ([`FromNode`]).

mod error;
mod from_node;
mod kind;

pub use error::LookupError;
pub use from_node::FromNode;
pub use kind::NodeKind;

use serde_json::Value;

/// Keyed access on a mapping node.
pub trait NodeExt {
    /// Child under `key`. `None` when the key is absent or `self` is not an object.
    fn child(&self, key: &str) -> Option<&Value>;

    /// Extracts the child under `key` as `T`.
    fn extract<T: FromNode>(&self, key: &str) -> Result<T, LookupError>;

    /// Borrows the child under `key` as a sequence of nodes.
    fn sequence(&self, key: &str) -> Result<&[Value], LookupError>;
}

impl NodeExt for Value {
    fn child(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn extract<T: FromNode>(&self, key: &str) -> Result<T, LookupError> {
        let child = self
            .child(key)
            .ok_or_else(|| LookupError::MissingKey(key.to_string()))?;
        T::from_node(child)
    }

    fn sequence(&self, key: &str) -> Result<&[Value], LookupError> {
        match self.child(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(LookupError::mismatch(NodeKind::Array, other)),
            None => Err(LookupError::MissingKey(key.to_string())),
        }
    }
}

use serde_json::Value;

use crate::{DecodeError, Mapper};

/// A composite that decodes itself from a mapper over its own node.
///
/// Any error returned from [`Mappable::from_map`] reaches the caller
/// unchanged, however deeply the composite is nested.
pub trait Mappable: Sized {
    fn from_map(map: Mapper<'_>) -> Result<Self, DecodeError>;

    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        Self::from_map(Mapper::new(node))
    }
}

/// Decodes a whole tree as `T`.
pub fn from_value<T: Mappable>(value: &Value) -> Result<T, DecodeError> {
    T::from_node(value)
}

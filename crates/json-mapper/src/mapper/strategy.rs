//! Decoding strategies, one per capability trait.
//!
//! A strategy is a zero-sized marker named at the call site. The marker, not
//! the target type, decides how a node is decoded, so a type implementing
//! several capability traits is never decoded by accident through the wrong
//! one.

use json_mapper_node::FromNode;
use serde_json::Value;

use super::{unwrap, Mapper};
use crate::{Convertible, DecodeError, Mappable, RawRepresentable, RawValue};

/// Decodes a single node into `T`.
pub trait Strategy<T> {
    /// Runs once per accessor call, before any lookup.
    fn admit() -> Result<(), DecodeError> {
        Ok(())
    }

    fn decode(node: &Value) -> Result<T, DecodeError>;
}

/// Reads the node directly through [`FromNode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

/// Lets the type convert itself through [`Convertible`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converted;

/// Reads the raw value, then rebuilds the case through [`RawRepresentable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

/// Recurses into the node with a fresh [`Mapper`] through [`Mappable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Nested;

impl<T: FromNode> Strategy<T> for Plain {
    fn decode(node: &Value) -> Result<T, DecodeError> {
        Ok(T::from_node(node)?)
    }
}

impl<T: Convertible> Strategy<T> for Converted {
    fn decode(node: &Value) -> Result<T, DecodeError> {
        unwrap(T::try_convert(node))
    }
}

impl<T: RawRepresentable> Strategy<T> for Raw {
    fn admit() -> Result<(), DecodeError> {
        if <T::Raw as RawValue>::UNRESTRICTED_INT {
            return Err(DecodeError::RawIntUnsupported);
        }
        Ok(())
    }

    fn decode(node: &Value) -> Result<T, DecodeError> {
        <Self as Strategy<T>>::admit()?;
        let raw = <T::Raw as FromNode>::from_node(node)?;
        T::from_raw(raw).ok_or(DecodeError::CannotInitFromRawValue)
    }
}

impl<T: Mappable> Strategy<T> for Nested {
    fn decode(node: &Value) -> Result<T, DecodeError> {
        T::from_map(Mapper::new(node))
    }
}

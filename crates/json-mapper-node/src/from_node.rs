//! Direct extraction of native types from a node.

use serde_json::{Map, Value};

use crate::{LookupError, NodeKind};

/// A type that can be read straight out of a single node.
///
/// Extraction is strict about shape: a string is never coerced into a number
/// and an integer target never accepts a fractional number.
pub trait FromNode: Sized {
    fn from_node(value: &Value) -> Result<Self, LookupError>;
}

impl FromNode for String {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(LookupError::mismatch(NodeKind::String, other)),
        }
    }
}

impl FromNode for bool {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(LookupError::mismatch(NodeKind::Bool, other)),
        }
    }
}

impl FromNode for f64 {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or(LookupError::OutOfRange { expected: "f64" }),
            other => Err(LookupError::mismatch(NodeKind::Number, other)),
        }
    }
}

impl FromNode for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        let n = f64::from_node(value)? as f32;
        if n.is_finite() {
            Ok(n)
        } else {
            Err(LookupError::OutOfRange { expected: "f32" })
        }
    }
}

macro_rules! impl_from_node_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromNode for $ty {
            fn from_node(value: &Value) -> Result<Self, LookupError> {
                let Value::Number(n) = value else {
                    return Err(LookupError::mismatch(NodeKind::Number, value));
                };
                let out_of_range = || LookupError::OutOfRange {
                    expected: stringify!($ty),
                };
                if let Some(i) = n.as_i64() {
                    return <$ty>::try_from(i).map_err(|_| out_of_range());
                }
                if let Some(u) = n.as_u64() {
                    return <$ty>::try_from(u).map_err(|_| out_of_range());
                }
                Err(out_of_range())
            }
        }
    )*};
}

impl_from_node_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromNode for Value {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        Ok(value.clone())
    }
}

impl FromNode for Vec<Value> {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            other => Err(LookupError::mismatch(NodeKind::Array, other)),
        }
    }
}

impl FromNode for Map<String, Value> {
    fn from_node(value: &Value) -> Result<Self, LookupError> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            other => Err(LookupError::mismatch(NodeKind::Object, other)),
        }
    }
}

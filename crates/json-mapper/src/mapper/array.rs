//! Array-valued accessors.
//!
//! The container is strict: a missing key or a non-array value fails the
//! call. Elements are not: an element that does not decode is dropped and the
//! rest are returned in order.

use json_mapper_node::{FromNode, NodeExt};
use serde_json::Value;

use super::{Converted, Mapper, Nested, Plain, Raw, Strategy};
use crate::{Convertible, DecodeError, Mappable, RawRepresentable};

impl Mapper<'_> {
    pub fn get_array<S: Strategy<T>, T>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        <S as Strategy<T>>::admit()?;
        let items = self.node.sequence(key)?;
        Ok(decode_each::<S, T>(key, items))
    }

    pub fn get_plain_array<T: FromNode>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.get_array::<Plain, T>(key)
    }

    pub fn get_convertible_array<T: Convertible>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, DecodeError> {
        self.get_array::<Converted, T>(key)
    }

    pub fn get_raw_array<T: RawRepresentable>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.get_array::<Raw, T>(key)
    }

    pub fn get_mappable_array<T: Mappable>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.get_array::<Nested, T>(key)
    }
}

fn decode_each<S: Strategy<T>, T>(key: &str, items: &[Value]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match <S as Strategy<T>>::decode(item) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::trace!(key, index, %error, "dropping undecodable array element");
                None
            }
        })
        .collect()
}

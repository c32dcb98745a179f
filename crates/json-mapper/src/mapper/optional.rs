//! Optional accessors.
//!
//! Each one runs its required counterpart and collapses every failure into
//! `None` through [`settle`]. Nothing is logged.

use json_mapper_node::FromNode;

use super::{Converted, Mapper, Nested, Plain, Raw, Strategy};
use crate::{Convertible, DecodeError, Mappable, RawRepresentable};

fn settle<T>(result: Result<T, DecodeError>) -> Option<T> {
    result.ok()
}

impl Mapper<'_> {
    pub fn get_optional<S: Strategy<T>, T>(&self, key: &str) -> Option<T> {
        settle(self.get::<S, T>(key))
    }

    pub fn get_optional_array<S: Strategy<T>, T>(&self, key: &str) -> Option<Vec<T>> {
        settle(self.get_array::<S, T>(key))
    }

    pub fn get_plain_optional<T: FromNode>(&self, key: &str) -> Option<T> {
        self.get_optional::<Plain, T>(key)
    }

    pub fn get_convertible_optional<T: Convertible>(&self, key: &str) -> Option<T> {
        self.get_optional::<Converted, T>(key)
    }

    pub fn get_raw_optional<T: RawRepresentable>(&self, key: &str) -> Option<T> {
        self.get_optional::<Raw, T>(key)
    }

    pub fn get_mappable_optional<T: Mappable>(&self, key: &str) -> Option<T> {
        self.get_optional::<Nested, T>(key)
    }

    pub fn get_plain_optional_array<T: FromNode>(&self, key: &str) -> Option<Vec<T>> {
        self.get_optional_array::<Plain, T>(key)
    }

    pub fn get_convertible_optional_array<T: Convertible>(&self, key: &str) -> Option<Vec<T>> {
        self.get_optional_array::<Converted, T>(key)
    }

    pub fn get_raw_optional_array<T: RawRepresentable>(&self, key: &str) -> Option<Vec<T>> {
        self.get_optional_array::<Raw, T>(key)
    }

    pub fn get_mappable_optional_array<T: Mappable>(&self, key: &str) -> Option<Vec<T>> {
        self.get_optional_array::<Nested, T>(key)
    }
}

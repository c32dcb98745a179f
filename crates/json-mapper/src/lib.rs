//! json-mapper - type-directed decoding of `serde_json` trees.
//!
//! A [`Mapper`] wraps one node and pulls typed fields out of it by key. The
//! call site picks how each field is decoded:
//!
//! - [`Plain`]: the node is read directly ([`FromNode`]).
//! - [`Converted`]: the type converts itself from a node ([`Convertible`]).
//! - [`Raw`]: the type is rebuilt from a raw value ([`RawRepresentable`]).
//! - [`Nested`]: the type decodes itself from a nested mapper ([`Mappable`]).
//!
//! Each strategy comes in four shapes: required, required array, optional and
//! optional array.
//!
//! ```
//! use json_mapper::{DecodeError, Mappable, Mapper};
//! use serde_json::json;
//!
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//!     email: Option<String>,
//! }
//!
//! impl Mappable for User {
//!     fn from_map(map: Mapper<'_>) -> Result<Self, DecodeError> {
//!         Ok(User {
//!             name: map.get_plain("name")?,
//!             tags: map.get_plain_array("tags")?,
//!             email: map.get_plain_optional("email"),
//!         })
//!     }
//! }
//!
//! let user: User = json_mapper::from_value(&json!({
//!     "name": "ada",
//!     "tags": ["admin", 7, "ops"],
//! }))
//! .unwrap();
//! assert_eq!(user.name, "ada");
//! assert_eq!(user.tags, ["admin", "ops"]);
//! assert_eq!(user.email, None);
//! ```

mod convertible;
mod error;
mod mappable;
mod mapper;
mod raw;

pub use convertible::Convertible;
pub use error::DecodeError;
pub use mappable::{from_value, Mappable};
pub use mapper::{Converted, Mapper, Nested, Plain, Raw, Strategy};
pub use raw::{RawRepresentable, RawValue};

pub use json_mapper_node::{FromNode, LookupError, NodeExt, NodeKind};

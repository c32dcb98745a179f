//! Types represented by an underlying raw value.

use json_mapper_node::FromNode;

/// A type usable as the raw value of a [`RawRepresentable`].
pub trait RawValue: FromNode {
    /// Set for the unrestricted integer type. Decoding a case set from an
    /// arbitrary integer is refused outright.
    const UNRESTRICTED_INT: bool = false;
}

impl RawValue for String {}
impl RawValue for bool {}
impl RawValue for f32 {}
impl RawValue for f64 {}
impl RawValue for i8 {}
impl RawValue for i16 {}
impl RawValue for i32 {}
impl RawValue for u8 {}
impl RawValue for u16 {}
impl RawValue for u32 {}
impl RawValue for u64 {}
impl RawValue for usize {}

impl RawValue for i64 {
    const UNRESTRICTED_INT: bool = true;
}

impl RawValue for isize {
    const UNRESTRICTED_INT: bool = true;
}

/// A closed set of cases, each identified by a raw value.
///
/// ```
/// use json_mapper::RawRepresentable;
///
/// #[derive(Debug, PartialEq)]
/// enum Suit {
///     Hearts,
///     Spades,
/// }
///
/// impl RawRepresentable for Suit {
///     type Raw = String;
///
///     fn from_raw(raw: String) -> Option<Self> {
///         match raw.as_str() {
///             "hearts" => Some(Suit::Hearts),
///             "spades" => Some(Suit::Spades),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> String {
///         match self {
///             Suit::Hearts => "hearts".into(),
///             Suit::Spades => "spades".into(),
///         }
///     }
/// }
///
/// assert_eq!(Suit::from_raw("spades".into()), Some(Suit::Spades));
/// assert_eq!(Suit::Hearts.raw_value(), "hearts");
/// ```
pub trait RawRepresentable: Sized {
    type Raw: RawValue;

    fn from_raw(raw: Self::Raw) -> Option<Self>;

    fn raw_value(&self) -> Self::Raw;
}

//! Self-conversion from a single node.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde_json::{Number, Value};

/// A type that knows how to build itself from one node.
///
/// Conversion never fails loudly: a node of the wrong shape yields `None`.
pub trait Convertible: Sized {
    fn try_convert(value: &Value) -> Option<Self>;
}

// Fractional numbers truncate toward zero; out-of-range and non-finite
// numbers do not convert.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }
    let f = n.as_f64()?;
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t < i128::MIN as f64 || t >= i128::MAX as f64 {
        return None;
    }
    Some(t as i128)
}

macro_rules! impl_convertible_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Convertible for $ty {
            fn try_convert(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => integral(n).and_then(|i| <$ty>::try_from(i).ok()),
                    _ => None,
                }
            }
        }
    )*};
}

impl_convertible_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Convertible for f64 {
    fn try_convert(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Convertible for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn try_convert(value: &Value) -> Option<Self> {
        let n = value.as_f64()? as f32;
        n.is_finite().then_some(n)
    }
}

impl Convertible for char {
    fn try_convert(value: &Value) -> Option<Self> {
        let mut chars = value.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Convertible for IpAddr {
    fn try_convert(value: &Value) -> Option<Self> {
        value.as_str()?.parse().ok()
    }
}

impl Convertible for SocketAddr {
    fn try_convert(value: &Value) -> Option<Self> {
        value.as_str()?.parse().ok()
    }
}

/// Seconds, as a non-negative number.
impl Convertible for Duration {
    fn try_convert(value: &Value) -> Option<Self> {
        Duration::try_from_secs_f64(value.as_f64()?).ok()
    }
}

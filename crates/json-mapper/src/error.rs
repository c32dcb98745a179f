use std::error::Error as StdError;

use json_mapper_node::LookupError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Why a field could not be decoded.
///
/// Errors raised inside nested composites reach the top-level caller as-is;
/// nothing on the way up wraps them.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no value under key `{0}`")]
    MissingKey(String),
    #[error("converted value is absent")]
    CannotUnwrap,
    #[error("raw value matches no case")]
    CannotInitFromRawValue,
    #[error("raw values of the unrestricted integer type are not supported")]
    RawIntUnsupported,
    #[error(transparent)]
    Lookup(LookupError),
    /// A composite's own domain failure.
    #[error("{0}")]
    Custom(BoxError),
}

impl DecodeError {
    pub fn custom<E: Into<BoxError>>(error: E) -> Self {
        DecodeError::Custom(error.into())
    }

    /// Borrows the domain error carried by [`DecodeError::Custom`], if it is an `E`.
    pub fn custom_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            DecodeError::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<LookupError> for DecodeError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::MissingKey(key) => DecodeError::MissingKey(key),
            other => DecodeError::Lookup(other),
        }
    }
}

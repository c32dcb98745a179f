use serde_json::Value;
use thiserror::Error;

use crate::NodeKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no value under key `{0}`")]
    MissingKey(String),
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: NodeKind, found: NodeKind },
    #[error("number is not representable as {expected}")]
    OutOfRange { expected: &'static str },
}

impl LookupError {
    pub(crate) fn mismatch(expected: NodeKind, found: &Value) -> Self {
        LookupError::TypeMismatch {
            expected,
            found: NodeKind::of(found),
        }
    }
}

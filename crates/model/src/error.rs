use crate::core::data_type::DataType;
use thiserror::Error;

/// Raised when an order spec has no usable comparison semantics. These are
/// configuration errors, not runtime input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order spec must contain at least one definition")]
    Empty,

    #[error("order spec must end with a distinct tie-breaker column")]
    MissingTieBreaker,

    #[error("order spec may contain only one distinct column")]
    MultipleTieBreakers,

    #[error("distinct column '{attribute}' must be the last definition")]
    TieBreakerNotLast { attribute: String },

    #[error("attribute '{attribute}' appears more than once in order spec")]
    DuplicateAttribute { attribute: String },

    #[error("cursor has no value for order attribute '{attribute}'")]
    UnknownAttribute { attribute: String },

    #[error("values for attribute '{attribute}' have no defined ordering")]
    Incomparable { attribute: String },
}

/// Raised when a cursor token fails to decode or validate. Recoverable by
/// the caller: the token is client input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor token is not valid base64")]
    Encoding,

    #[error("cursor payload is malformed: {0}")]
    Payload(String),

    #[error("cursor attributes [{found}] do not match order spec attributes [{expected}]")]
    AttributeMismatch { expected: String, found: String },

    #[error("cursor value for '{attribute}' is {found}, expected {expected}")]
    TypeMismatch {
        attribute: String,
        expected: DataType,
        found: DataType,
    },
}

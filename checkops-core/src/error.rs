//! Error taxonomy for validated operations
//!
//! Every operation returns [`Result`]. Callers tell failures apart through
//! [`OpError::kind`], which yields a plain [`ErrorKind`] value to match on.

use core::fmt;
use thiserror::Error;

/// Distinguishable categories of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A required reference input was not supplied
    NullInput,
    /// A supplied value is outside its logically valid domain
    InvalidArgument,
    /// An index falls outside `[0, length)` of the target collection
    IndexOutOfRange,
    /// The state required by the operation does not hold
    InvalidOperation,
    /// Text cannot be parsed into the required numeric type
    FormatError,
    /// A lookup key has no corresponding entry
    KeyNotFound,
    /// A computed integer result exceeds the representable range
    ArithmeticOverflow,
    /// A division's divisor is zero
    DivideByZero,
}

impl ErrorKind {
    /// Every kind, in taxonomy order
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::NullInput,
        ErrorKind::InvalidArgument,
        ErrorKind::IndexOutOfRange,
        ErrorKind::InvalidOperation,
        ErrorKind::FormatError,
        ErrorKind::KeyNotFound,
        ErrorKind::ArithmeticOverflow,
        ErrorKind::DivideByZero,
    ];

    /// Get the taxonomy name
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NullInput => "NullInput",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::IndexOutOfRange => "IndexOutOfRange",
            ErrorKind::InvalidOperation => "InvalidOperation",
            ErrorKind::FormatError => "FormatError",
            ErrorKind::KeyNotFound => "KeyNotFound",
            ErrorKind::ArithmeticOverflow => "ArithmeticOverflow",
            ErrorKind::DivideByZero => "DivideByZero",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors signaled by validated operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Required input was absent
    #[error("required input `{name}` was not provided")]
    NullInput {
        /// Name of the missing parameter
        name: &'static str,
    },

    /// Argument outside its valid domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Index outside the collection
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: isize,
        /// Length of the collection
        len: usize,
    },

    /// Operation not permitted in the current state
    #[error("operation not permitted: {reason}")]
    InvalidOperation {
        /// The unmet requirement
        reason: &'static str,
    },

    /// Malformed numeric text
    #[error("{input:?} is not a valid {target} literal")]
    FormatError {
        /// The text as supplied
        input: String,
        /// Name of the numeric type being parsed
        target: &'static str,
    },

    /// Lookup key absent
    #[error("key {key} was not found")]
    KeyNotFound {
        /// Debug rendering of the key
        key: String,
    },

    /// Result outside the representable range
    #[error("{operation} overflowed the range of {target}")]
    ArithmeticOverflow {
        /// The arithmetic step that overflowed
        operation: &'static str,
        /// Name of the fixed-width type
        target: &'static str,
    },

    /// Zero divisor
    #[error("attempted to divide {dividend} by zero")]
    DivideByZero {
        /// The dividend, rendered as text
        dividend: String,
    },
}

impl OpError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OpError::NullInput { .. } => ErrorKind::NullInput,
            OpError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            OpError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            OpError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            OpError::FormatError { .. } => ErrorKind::FormatError,
            OpError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            OpError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
            OpError::DivideByZero { .. } => ErrorKind::DivideByZero,
        }
    }
}

/// Result type for validated operations
pub type Result<T> = std::result::Result<T, OpError>;

/// Log a rejection on its way back to the caller
pub(crate) fn rejected(operation: &'static str) -> impl FnOnce(OpError) -> OpError {
    move |err| {
        log::debug!("{operation} rejected input ({}): {err}", err.kind());
        err
    }
}

//! Serializable error reports
//!
//! Flattens an [`OpError`] into a kind plus message so callers can ship
//! outcomes across process boundaries as JSON.

use crate::error::{ErrorKind, OpError};
use serde::{Deserialize, Serialize};

/// Error information for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Kind of the failure
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl ErrorReport {
    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON object
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&OpError> for ErrorReport {
    fn from(err: &OpError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<OpError> for ErrorReport {
    fn from(err: OpError) -> Self {
        Self::from(&err)
    }
}

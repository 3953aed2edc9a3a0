use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw field that is neither numeric nor a recognized missing token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("field {field:?}: value {value:?} is not numeric and not a recognized missing token")]
pub struct SanitizationError {
    pub field: String,
    pub value: String,
}

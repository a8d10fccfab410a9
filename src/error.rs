use thiserror::Error;

use crate::scene::{ElementId, ElementKind, PropertyKey};

/// Errors raised by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("element {0} not found")]
    ElementNotFound(ElementId),
    #[error("unknown element kind: {0:?}")]
    UnknownKind(String),
    #[error("unknown property: {0:?}")]
    UnknownProperty(String),
    #[error("property `{key}` does not apply to {kind} elements")]
    PropertyNotApplicable { kind: ElementKind, key: PropertyKey },
    #[error("malformed value for `{key}`: {reason}")]
    MalformedValue { key: PropertyKey, reason: String },
    #[error("no stored playground state")]
    NoStoredState,
    #[error("stored record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("stored state could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EditorError {
    /// Missing-target errors are declined silently instead of being reported.
    pub fn is_missing_target(&self) -> bool {
        matches!(
            self,
            EditorError::ElementNotFound(_) | EditorError::NoStoredState
        )
    }

    /// Log at the level this error deserves. Nothing reaches the user.
    pub fn report(&self, context: &str) {
        match self {
            e if e.is_missing_target() => log::debug!("{}: {}", context, e),
            EditorError::Storage(_) | EditorError::Decode(_) | EditorError::InvalidRecord { .. } => {
                log::error!("{}: {}", context, self)
            }
            _ => log::warn!("{}: {}", context, self),
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;

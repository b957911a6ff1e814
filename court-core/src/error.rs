//! Error types for court design state handling.

use thiserror::Error;

/// Broad classification of design errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unparsable external input (URL parameter, stored record, user text).
    MalformedInput,
    /// A court or element reference that does not exist in the taxonomy.
    InvalidReference,
    /// Contact form validation failure.
    Validation,
    /// Storage backend failure.
    Io,
}

/// Main error type for the designer.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("Unknown court type: {name}")]
    UnknownCourt { name: String },

    #[error("Unknown court element: {name}")]
    UnknownElement { name: String },

    #[error("Element '{element}' is not part of the {court} court")]
    ElementNotOnCourt { court: String, element: String },

    #[error("Not a court designer route: {path}")]
    UnknownRoute { path: String },

    #[error("Invalid color '{value}': expected #rgb or #rrggbb")]
    InvalidColor { value: String },

    #[error("Design parameter is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Design parameter is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid design data: {message}")]
    InvalidDesign { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Email address is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail { email: String },

    #[error("Unknown contact method: {value}")]
    UnknownContactMethod { value: String },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesignError {
    /// Get the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DesignError::UnknownCourt { .. } => ErrorKind::InvalidReference,
            DesignError::UnknownElement { .. } => ErrorKind::InvalidReference,
            DesignError::ElementNotOnCourt { .. } => ErrorKind::InvalidReference,
            DesignError::UnknownRoute { .. } => ErrorKind::InvalidReference,
            DesignError::InvalidColor { .. } => ErrorKind::MalformedInput,
            DesignError::Base64(_) => ErrorKind::MalformedInput,
            DesignError::Utf8(_) => ErrorKind::MalformedInput,
            DesignError::InvalidDesign { .. } => ErrorKind::MalformedInput,
            DesignError::Json(_) => ErrorKind::MalformedInput,
            DesignError::MissingEmail => ErrorKind::Validation,
            DesignError::InvalidEmail { .. } => ErrorKind::Validation,
            DesignError::UnknownContactMethod { .. } => ErrorKind::Validation,
            DesignError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_design(message: impl Into<String>) -> Self {
        DesignError::InvalidDesign {
            message: message.into(),
        }
    }
}

/// Result type alias for designer operations.
pub type Result<T> = std::result::Result<T, DesignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            DesignError::UnknownCourt {
                name: "golf".into()
            }
            .kind(),
            ErrorKind::InvalidReference
        );
        assert_eq!(DesignError::MissingEmail.kind(), ErrorKind::Validation);
        assert_eq!(
            DesignError::invalid_design("not an object").kind(),
            ErrorKind::MalformedInput
        );
    }

    #[test]
    fn test_invalid_email_message() {
        let err = DesignError::InvalidEmail {
            email: "nope".into(),
        };
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }
}

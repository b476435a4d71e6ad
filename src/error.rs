//! Typed operation errors shared by every core component.
//!
//! Errors are values returned to the caller, never panics across the HTTP
//! boundary. The four variants map one-to-one to the failure classes the
//! service can hit: local field validation, transport, broken payload
//! contracts, and semantically invalid values.

use std::collections::BTreeMap;

use thiserror::Error;

/// Outcome of a core operation.
pub type OperationResult<T> = Result<T, OpError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpError {
    /// Field-level validation failure. Raised locally, before any network
    /// call is made.
    #[error("Validation failed")]
    Validation { errors: BTreeMap<String, String> },

    /// Network failure or non-2xx response from a collaborator.
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose payload does not match the expected shape.
    #[error("{0}")]
    Contract(String),

    /// Well-formed value that is semantically invalid, e.g. an unknown
    /// assistant persona.
    #[error("{0}")]
    Domain(String),
}

impl OpError {
    /// Single-field validation error.
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        OpError::Validation { errors }
    }

    /// The field→message map for validation errors, `None` otherwise.
    pub fn validation_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            OpError::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = OpError::validation("to", "To field must be a valid email address");
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("to").map(String::as_str),
            Some("To field must be a valid email address")
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            OpError::Domain("Invalid assistant type".into()).to_string(),
            "Invalid assistant type"
        );
        assert_eq!(
            OpError::validation("body", "Body is required").to_string(),
            "Validation failed"
        );
    }
}

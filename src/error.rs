//! Error types and handling
//!
//! Both error kinds are raised only when a pass is issued. Swipe evaluation
//! is total: an unpermitted request yields an unsuccessful result, never an
//! error.

use thiserror::Error;

use crate::types::EntrantField;

/// Errors that can occur while issuing a pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    /// One or more fields required by the target category are absent
    #[error("missing information: {}", format_fields(.fields))]
    MissingInformation {
        /// The required fields that were absent on the entrant
        fields: Vec<EntrantField>,
    },

    /// The entrant's age violates a category-specific age constraint
    #[error("wrong age: {description}")]
    WrongAge {
        /// Human-readable description of the violated constraint
        description: String,
    },
}

fn format_fields(fields: &[EntrantField]) -> String {
    fields.iter().map(|field| field.to_string()).collect::<Vec<_>>().join(", ")
}

impl PassError {
    /// Create a missing-information error for the given fields
    pub fn missing_information(fields: Vec<EntrantField>) -> Self {
        Self::MissingInformation { fields }
    }

    /// Create a wrong-age error with the given description
    pub fn wrong_age(description: impl Into<String>) -> Self {
        Self::WrongAge { description: description.into() }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            PassError::MissingInformation { .. } => "Missing Information",
            PassError::WrongAge { .. } => "Wrong Age",
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Issuance errors are always recoverable: the caller can re-prompt for
    /// corrected entrant data and try again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PassError::MissingInformation { .. } => true,
            PassError::WrongAge { .. } => true,
        }
    }
}

/// Result type for pass issuance operations
pub type PassResult<T> = Result<T, PassError>;

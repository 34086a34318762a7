//! Workflow error types
//!
//! Validation failures are collected per field so a form can be shown again
//! with every problem at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field name for the selected documents
pub const FIELD_DOCUMENTS: &str = "documents";
/// Field name for the assignee
pub const FIELD_ASSIGNED_TO: &str = "assigned_to";
/// Field name for the tag
pub const FIELD_TAG: &str = "tag";

/// Message for a blank required field
pub const MSG_REQUIRED: &str = "This field is required.";
/// Message for a reference that does not resolve
pub const MSG_INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";
/// Message for an empty document selection
pub const MSG_NO_SELECTION: &str = "Items must be selected in order to perform actions on them.";

/// Per-field validation messages, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Record a message for a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Whether no field has errors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for a field
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether a field has errors
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate over `(field, messages)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Errors surfaced by the assignment workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// One or more fields failed validation; nothing was changed
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The requester lacks the required privilege; nothing was changed
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The requested task does not exist or is not visible to the requester
    #[error("Not found: {0}")]
    NotFound(String),

    /// A store call failed
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl WorkflowError {
    /// Field errors, if this is a validation failure
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

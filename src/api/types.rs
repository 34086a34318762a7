//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::core::models::{DocumentId, TaskId};
use crate::core::services::TaskSummary;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a handler result
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(ApiErrorData::from(&err)),
            },
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for opening the assignment form
#[derive(Debug, Clone, Deserialize)]
pub struct BeginAssignmentRequest {
    /// Selected document ids
    #[serde(default, alias = "_selected_action")]
    pub documents: Vec<DocumentId>,
}

/// Request body for applying an assignment
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyAssignmentRequest {
    /// Selected document ids
    #[serde(default, alias = "_selected_action")]
    pub documents: Vec<DocumentId>,
    /// Assignee username or id
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Tag name or id
    #[serde(default)]
    pub tag: Option<String>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for changing a task's status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    /// Task to update
    pub id: TaskId,
    /// New status (pending, in_progress, done)
    pub status: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Task list response data
#[derive(Debug, Serialize)]
pub struct TasksData {
    /// Number of tasks returned
    pub total: usize,
    /// Task rows, newest first
    pub tasks: Vec<TaskSummary>,
}

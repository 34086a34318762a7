//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and thin handlers
//! over [`AssignmentWorkflow`](crate::core::services::AssignmentWorkflow) that
//! any web framework (or the CLI) can call in-process.
//!
//! ## Design
//!
//! - **Handlers take the requester explicitly**: authentication stays outside
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{apply_assignment, begin_assignment, get_task, list_tasks, update_task_status};
pub use types::{
    ApiResponse, ApplyAssignmentRequest, BeginAssignmentRequest, TasksData, UpdateStatusRequest,
};

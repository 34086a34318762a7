//! Pure API handlers
//!
//! These handlers are HTTP-agnostic. They take typed input plus the
//! requester and return `Result<T, ApiError>`. Every workflow error is
//! translated here; none escape as faults.

use crate::core::models::{TaskId, TaskStatus, User};
use crate::core::services::{AssignmentOutcome, AssignmentWorkflow, FormPayload, TaskQuery, TaskSummary};

use super::error::ApiError;
use super::types::{ApplyAssignmentRequest, BeginAssignmentRequest, TasksData, UpdateStatusRequest};

// =============================================================================
// ASSIGNMENT
// =============================================================================

/// Open the assignment form for a selection of documents
pub fn begin_assignment(
    workflow: &AssignmentWorkflow<'_>,
    req: &BeginAssignmentRequest,
    requester: &User,
) -> Result<FormPayload, ApiError> {
    Ok(workflow.begin(&req.documents, requester)?)
}

/// Create a validation task over the selected documents
pub fn apply_assignment(
    workflow: &AssignmentWorkflow<'_>,
    req: &ApplyAssignmentRequest,
    requester: &User,
) -> Result<AssignmentOutcome, ApiError> {
    Ok(workflow.apply_assignment(
        &req.documents,
        req.assigned_to.as_deref(),
        req.tag.as_deref(),
        req.note.as_deref(),
        requester,
    )?)
}

// =============================================================================
// TASKS
// =============================================================================

/// List the tasks visible to the requester
pub fn list_tasks(
    workflow: &AssignmentWorkflow<'_>,
    query: &TaskQuery,
    requester: &User,
) -> Result<TasksData, ApiError> {
    let tasks = workflow.list_tasks(requester, query)?;
    Ok(TasksData {
        total: tasks.len(),
        tasks,
    })
}

/// Get a single visible task
pub fn get_task(
    workflow: &AssignmentWorkflow<'_>,
    id: TaskId,
    requester: &User,
) -> Result<TaskSummary, ApiError> {
    Ok(workflow.task_summary(id, requester)?)
}

/// Change a task's status
pub fn update_task_status(
    workflow: &AssignmentWorkflow<'_>,
    req: &UpdateStatusRequest,
    requester: &User,
) -> Result<TaskSummary, ApiError> {
    let status: TaskStatus = req.status.parse().map_err(ApiError::bad_request)?;
    workflow.update_status(req.id, status, requester)?;
    Ok(workflow.task_summary(req.id, requester)?)
}

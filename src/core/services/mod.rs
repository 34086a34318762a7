//! Business logic services
//!
//! Orchestration over domain models. Services reach external systems only
//! through the port traits in [`crate::core::ports`].
//!
//! - [`visibility`] - Role-based visibility and permission predicates
//! - [`repository`] - Task creation, document linking and tagging
//! - [`assignment`] - The two-step bulk assignment protocol
//! - [`query`] - Task filters, search and summary rows
//! - [`error`] - Field errors and the workflow error type

pub mod assignment;
pub mod error;
pub mod query;
pub mod repository;
pub mod visibility;

pub use assignment::{
    AssignmentOutcome, AssignmentState, AssignmentSubmission, AssignmentWorkflow, FormPayload,
    ValidatedAssignment,
};
pub use error::{FieldErrors, WorkflowError};
pub use query::{NameIndex, TaskQuery, TaskSummary};
pub use repository::{TaskCreation, TaskRepository};
pub use visibility::{Role, VisibilityPolicy};

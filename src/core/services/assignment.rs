//! Bulk assignment workflow
//!
//! Assigning a validation task to a set of documents is a two-step protocol:
//!
//! 1. [`AssignmentWorkflow::begin`] returns a [`FormPayload`] with the
//!    selection and the assignee prefilled with the requester.
//! 2. [`AssignmentWorkflow::submit`] validates a submission. Missing or
//!    unresolvable fields yield [`AssignmentState::AwaitingInput`] with field
//!    errors. A complete submission yields [`AssignmentState::Applying`],
//!    which [`AssignmentWorkflow::apply`] turns into a stored task.
//!
//! Permission is checked before any field is looked at. Nothing is written
//! until `apply`.

use log::{debug, info, warn};
use serde::Serialize;

use super::error::{
    FIELD_ASSIGNED_TO, FIELD_DOCUMENTS, FIELD_TAG, FieldErrors, MSG_INVALID_CHOICE,
    MSG_NO_SELECTION, MSG_REQUIRED, WorkflowError,
};
use super::query::{NameIndex, TaskQuery, TaskSummary};
use super::repository::TaskRepository;
use super::visibility::VisibilityPolicy;
use crate::core::models::{Document, DocumentId, Tag, TaskId, TaskStatus, User, ValidationTask};
use crate::core::ports::Backend;

/// Title shown above the assignment form
pub const FORM_TITLE: &str = "Assign Validation Task";

/// What the presentation layer needs to render the assignment form
#[derive(Debug, Clone, Serialize)]
pub struct FormPayload {
    /// Form title
    pub title: String,
    /// Selected ids, carried through to the next submission
    pub selected: Vec<DocumentId>,
    /// Selected documents that exist, for display
    pub documents: Vec<Document>,
    /// Assignee field value
    pub assigned_to: Option<String>,
    /// Tag field value
    pub tag: Option<String>,
    /// Note field value
    pub note: String,
    /// Validation messages from the previous submission
    pub errors: FieldErrors,
}

/// Raw field values submitted by the requester
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSubmission {
    /// Selected document ids
    pub selected: Vec<DocumentId>,
    /// Assignee (username or id)
    pub assigned_to: Option<String>,
    /// Tag (name or id)
    pub tag: Option<String>,
    /// Optional note
    pub note: Option<String>,
}

/// A submission whose references all resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAssignment {
    /// Selected document ids
    pub selected: Vec<DocumentId>,
    /// Resolved assignee
    pub assignee: User,
    /// Resolved tag
    pub tag: Option<Tag>,
    /// Trimmed note
    pub note: String,
    /// Who submitted the assignment
    pub requester: User,
}

/// Protocol state after a submission
#[derive(Debug, Clone)]
pub enum AssignmentState {
    /// Required input is missing or invalid; show the form again
    AwaitingInput(FormPayload),
    /// Input is complete; ready to create the task
    Applying(ValidatedAssignment),
}

/// Result of a successful assignment
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentOutcome {
    /// The created task
    pub task_id: TaskId,
    /// Documents linked to the task
    pub linked: usize,
    /// Selected ids that matched no document
    pub missing: Vec<DocumentId>,
    /// Linked documents that already carried the tag
    pub already_tagged: Vec<DocumentId>,
    /// Confirmation for the requester
    pub message: String,
}

/// Runs the assignment protocol and task listing against a backend
#[derive(Debug, Clone)]
pub struct AssignmentWorkflow<'a> {
    backend: Backend<'a>,
    policy: VisibilityPolicy,
    require_tag: bool,
}

impl<'a> AssignmentWorkflow<'a> {
    /// Create a workflow. The tag field is required by default.
    #[must_use]
    pub const fn new(backend: Backend<'a>, policy: VisibilityPolicy) -> Self {
        Self {
            backend,
            policy,
            require_tag: true,
        }
    }

    /// Whether a blank tag is rejected
    #[must_use]
    pub fn require_tag(mut self, require: bool) -> Self {
        self.require_tag = require;
        self
    }

    /// The visibility policy in use
    #[must_use]
    pub const fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Open the form for a selection
    ///
    /// The assignee is prefilled with the requester. Nothing is written. An
    /// empty selection is rejected before any form is shown.
    pub fn begin(
        &self,
        selected: &[DocumentId],
        requester: &User,
    ) -> Result<FormPayload, WorkflowError> {
        self.ensure_can_create(requester)?;
        ensure_selection(selected)?;
        debug!("Opening assignment form for {} document(s)", selected.len());

        Ok(FormPayload {
            title: FORM_TITLE.to_string(),
            selected: selected.to_vec(),
            documents: self.selected_documents(selected)?,
            assigned_to: Some(requester.username.clone()),
            tag: None,
            note: String::new(),
            errors: FieldErrors::default(),
        })
    }

    /// Validate a submission and decide the next protocol state
    pub fn submit(
        &self,
        submission: AssignmentSubmission,
        requester: &User,
    ) -> Result<AssignmentState, WorkflowError> {
        self.ensure_can_create(requester)?;

        let mut errors = FieldErrors::default();

        if submission.selected.is_empty() {
            errors.add(FIELD_DOCUMENTS, MSG_NO_SELECTION);
        }

        let assignee = match non_blank(submission.assigned_to.as_deref()) {
            None => {
                errors.add(FIELD_ASSIGNED_TO, MSG_REQUIRED);
                None
            },
            Some(key) => {
                let user = self.backend.users.resolve(key)?;
                if user.is_none() {
                    errors.add(FIELD_ASSIGNED_TO, MSG_INVALID_CHOICE);
                }
                user
            },
        };

        let tag = match non_blank(submission.tag.as_deref()) {
            None => {
                if self.require_tag {
                    errors.add(FIELD_TAG, MSG_REQUIRED);
                }
                None
            },
            Some(key) => {
                let tag = self.backend.tags.resolve(key)?;
                if tag.is_none() {
                    errors.add(FIELD_TAG, MSG_INVALID_CHOICE);
                }
                tag
            },
        };

        let note = submission.note.as_deref().map(str::trim).unwrap_or_default().to_string();

        match assignee {
            Some(assignee) if errors.is_empty() => {
                Ok(AssignmentState::Applying(ValidatedAssignment {
                    selected: submission.selected,
                    assignee,
                    tag,
                    note,
                    requester: requester.clone(),
                }))
            },
            _ => {
                debug!("Assignment submission rejected: {errors}");
                Ok(AssignmentState::AwaitingInput(FormPayload {
                    title: FORM_TITLE.to_string(),
                    documents: self.selected_documents(&submission.selected)?,
                    selected: submission.selected,
                    assigned_to: submission.assigned_to,
                    tag: submission.tag,
                    note,
                    errors,
                }))
            },
        }
    }

    /// Create the task for a validated submission
    ///
    /// Privilege and selection are checked again, so a hand-built
    /// [`ValidatedAssignment`] cannot bypass them.
    pub fn apply(
        &self,
        assignment: ValidatedAssignment,
    ) -> Result<AssignmentOutcome, WorkflowError> {
        self.ensure_can_create(&assignment.requester)?;
        ensure_selection(&assignment.selected)?;

        let repository = TaskRepository::new(self.backend.documents, self.backend.tasks);
        let creation = repository.create_task(
            assignment.assignee.id,
            assignment.requester.id,
            assignment.tag.as_ref(),
            &assignment.note,
            &assignment.selected,
        )?;

        Ok(AssignmentOutcome {
            task_id: creation.task.id,
            linked: creation.linked,
            message: format!("Validation task created for {} documents.", creation.linked),
            missing: creation.missing,
            already_tagged: creation.already_tagged,
        })
    }

    /// Validate and apply in one call
    ///
    /// A submission that would re-display the form is reported as
    /// [`WorkflowError::Validation`].
    pub fn apply_assignment(
        &self,
        selected: &[DocumentId],
        assigned_to: Option<&str>,
        tag: Option<&str>,
        note: Option<&str>,
        requester: &User,
    ) -> Result<AssignmentOutcome, WorkflowError> {
        let submission = AssignmentSubmission {
            selected: selected.to_vec(),
            assigned_to: assigned_to.map(String::from),
            tag: tag.map(String::from),
            note: note.map(String::from),
        };

        match self.submit(submission, requester)? {
            AssignmentState::Applying(assignment) => self.apply(assignment),
            AssignmentState::AwaitingInput(form) => Err(WorkflowError::Validation(form.errors)),
        }
    }

    /// Every task the requester may see, in store order
    pub fn list_visible_tasks(&self, requester: &User) -> anyhow::Result<Vec<ValidationTask>> {
        let tasks = self.backend.tasks.list()?;
        let total = tasks.len();
        let visible = self.policy.filter_visible(requester, tasks);
        debug!(
            "{} of {} task(s) visible to {} ({})",
            visible.len(),
            total,
            requester.username,
            self.policy.role(requester)
        );
        Ok(visible)
    }

    /// Visible tasks narrowed by `query`, as summary rows
    pub fn list_tasks(
        &self,
        requester: &User,
        query: &TaskQuery,
    ) -> Result<Vec<TaskSummary>, WorkflowError> {
        let visible = self.list_visible_tasks(requester)?;
        let names = NameIndex::load(&self.backend, &visible)?;
        Ok(query
            .apply(visible, &names)
            .iter()
            .map(|t| TaskSummary::from_task(t, &names))
            .collect())
    }

    /// A single visible task
    ///
    /// Tasks the requester may not see are reported as not found.
    pub fn get_task(&self, id: TaskId, requester: &User) -> Result<ValidationTask, WorkflowError> {
        self.backend
            .tasks
            .get(id)?
            .filter(|t| self.policy.is_visible(requester, t))
            .ok_or_else(|| WorkflowError::NotFound(format!("Task '{id}' not found")))
    }

    /// A single visible task as a summary row
    pub fn task_summary(&self, id: TaskId, requester: &User) -> Result<TaskSummary, WorkflowError> {
        let task = self.get_task(id, requester)?;
        let names = NameIndex::load(&self.backend, std::slice::from_ref(&task))?;
        Ok(TaskSummary::from_task(&task, &names))
    }

    /// Change a task's status
    pub fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        requester: &User,
    ) -> Result<ValidationTask, WorkflowError> {
        let mut task = self.get_task(id, requester)?;
        if !self.policy.can_change_status(requester, &task) {
            warn!("{} may not change the status of task {id}", requester.username);
            return Err(WorkflowError::PermissionDenied(format!(
                "{} may not change the status of task {id}",
                requester.username
            )));
        }

        if task.status != status {
            info!("Task {id}: {} -> {status} by {}", task.status, requester.username);
            task.status = status;
            self.backend.tasks.update(&task)?;
        }
        Ok(task)
    }

    fn ensure_can_create(&self, requester: &User) -> Result<(), WorkflowError> {
        if self.policy.can_create(requester) {
            return Ok(());
        }
        warn!("{} may not create validation tasks", requester.username);
        Err(WorkflowError::PermissionDenied(format!(
            "{} may not create validation tasks",
            requester.username
        )))
    }

    fn selected_documents(&self, selected: &[DocumentId]) -> anyhow::Result<Vec<Document>> {
        let mut documents = self.backend.documents.find_by_ids(selected)?;
        documents.retain(|d| selected.contains(&d.id));
        documents.sort_by_key(|d| d.id);
        documents.dedup_by_key(|d| d.id);
        Ok(documents)
    }
}

fn ensure_selection(selected: &[DocumentId]) -> Result<(), WorkflowError> {
    if !selected.is_empty() {
        return Ok(());
    }
    let mut errors = FieldErrors::default();
    errors.add(FIELD_DOCUMENTS, MSG_NO_SELECTION);
    Err(WorkflowError::Validation(errors))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

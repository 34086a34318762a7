//! Inspect and update validation tasks

use anyhow::Context;

use docreview::core::models::{DocumentId, TaskId, TaskStatus};
use docreview::core::services::TaskQuery;
use docreview::output::{OutputMode, TaskListResult, TaskShowResult};

use super::context::Session;
use crate::cli::app::TaskAction;

/// Run a task subcommand
pub fn task(action: TaskAction, user: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open(user)?;
    let requester = session.requester()?;
    let workflow = session.workflow();

    match action {
        TaskAction::List {
            status,
            assignee,
            creator,
            tag,
            document,
            due_before,
            search,
        } => {
            let backend = session.backend();
            let mut query = TaskQuery {
                document: document.map(DocumentId),
                due_before,
                search,
                ..TaskQuery::default()
            };
            if let Some(status) = status {
                query.status = Some(status.parse::<TaskStatus>().map_err(anyhow::Error::msg)?);
            }
            if let Some(key) = assignee {
                let user = backend.users.resolve(&key)?.with_context(|| format!("Unknown user: {key}"))?;
                query.assigned_to = Some(user.id);
            }
            if let Some(key) = creator {
                let user = backend.users.resolve(&key)?.with_context(|| format!("Unknown user: {key}"))?;
                query.created_by = Some(user.id);
            }
            if let Some(key) = tag {
                let tag = backend.tags.resolve(&key)?.with_context(|| format!("Unknown tag: {key}"))?;
                query.tag = Some(tag.id);
            }

            let tasks = workflow.list_tasks(&requester, &query)?;
            TaskListResult {
                total: tasks.len(),
                tasks,
            }
            .render(mode);
        },
        TaskAction::Show { id } => {
            let task = workflow.task_summary(TaskId(id), &requester)?;
            TaskShowResult { task }.render(mode);
        },
        TaskAction::Status { id, status } => {
            let status: TaskStatus = status.parse().map_err(anyhow::Error::msg)?;
            workflow.update_status(TaskId(id), status, &requester)?;
            let task = workflow.task_summary(TaskId(id), &requester)?;
            TaskShowResult { task }.render(mode);
        },
    }

    Ok(())
}

//! Assign validation tasks to documents

use docreview::core::models::DocumentId;
use docreview::core::services::{AssignmentState, AssignmentSubmission};
use docreview::output::{AssignFormResult, AssignResult, OutputMode};

use super::context::Session;
use crate::cli::app::AssignAction;

/// Run an assign subcommand
pub fn assign(action: AssignAction, user: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open(user)?;
    let requester = session.requester()?;
    let workflow = session.workflow();

    match action {
        AssignAction::Begin { documents } => {
            let selected: Vec<DocumentId> = documents.into_iter().map(DocumentId).collect();
            let form = workflow.begin(&selected, &requester)?;
            AssignFormResult {
                success: true,
                form,
            }
            .render(mode);
            Ok(())
        },
        AssignAction::Apply {
            documents,
            assignee,
            tag,
            note,
        } => {
            let submission = AssignmentSubmission {
                selected: documents.into_iter().map(DocumentId).collect(),
                assigned_to: assignee,
                tag,
                note,
            };

            match workflow.submit(submission, &requester)? {
                AssignmentState::Applying(assignment) => {
                    let outcome = workflow.apply(assignment)?;
                    AssignResult {
                        success: true,
                        outcome,
                    }
                    .render(mode);
                    Ok(())
                },
                AssignmentState::AwaitingInput(form) => {
                    AssignFormResult {
                        success: false,
                        form,
                    }
                    .render(mode);
                    std::process::exit(1);
                },
            }
        },
    }
}

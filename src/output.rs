//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{AssignmentOutcome, FieldErrors, FormPayload, TaskSummary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// The assignment form, as shown before submission or after rejected input
#[derive(Debug, Serialize)]
pub struct AssignFormResult {
    /// False when the form is shown again with field errors
    pub success: bool,
    /// The form payload
    pub form: FormPayload,
}

impl AssignFormResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let form = &self.form;
        println!("{}\n", form.title.bold());

        if form.documents.is_empty() {
            println!("  No matching documents selected.");
        } else {
            println!("  Documents:");
            for doc in &form.documents {
                println!("    [{}] {}", doc.id, doc.title);
            }
        }
        println!();
        println!("  Assign to: {}", form.assigned_to.as_deref().unwrap_or(""));
        println!("  Tag:       {}", form.tag.as_deref().unwrap_or(""));
        println!("  Note:      {}", form.note);

        if !form.errors.is_empty() {
            println!();
            render_field_errors(&form.errors);
        }
    }
}

fn render_field_errors(errors: &FieldErrors) {
    println!("{}", "Please correct the errors below.".red());
    for (field, messages) in errors.iter() {
        for message in messages {
            println!("  {field}: {message}");
        }
    }
}

/// Result of an applied assignment
#[derive(Debug, Serialize)]
pub struct AssignResult {
    /// Whether the task was created
    pub success: bool,
    /// Outcome details
    pub outcome: AssignmentOutcome,
}

impl AssignResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let outcome = &self.outcome;
        println!("{}", outcome.message.green());
        println!("  Task: #{}", outcome.task_id);
        if !outcome.missing.is_empty() {
            println!(
                "  {} {}",
                "Not found:".yellow(),
                outcome.missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            );
        }
        if !outcome.already_tagged.is_empty() {
            println!(
                "  Already tagged: {}",
                outcome
                    .already_tagged
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
}

/// Result of a task list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Total tasks shown
    pub total: usize,
    /// Task rows
    pub tasks: Vec<TaskSummary>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No validation tasks.");
            return;
        }

        println!("Validation tasks ({}):\n", self.total);
        for t in &self.tasks {
            println!(
                "  #{:<4} [{}] {}  -> {}  due {}  ({} documents)",
                t.id.get(),
                t.status,
                t.tag.as_deref().unwrap_or("-"),
                t.assigned_to,
                t.due_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
                t.documents_count
            );
        }
    }
}

/// Result of a task show or status change
#[derive(Debug, Serialize)]
pub struct TaskShowResult {
    /// The task
    pub task: TaskSummary,
}

impl TaskShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let t = &self.task;
        println!("{} #{}", "Validation task".bold(), t.id);
        println!("  Status:     {}", t.status);
        println!("  Tag:        {}", t.tag.as_deref().unwrap_or("-"));
        println!("  Assigned:   {}", t.assigned_to);
        println!("  Created by: {}", t.created_by);
        println!("  Created:    {}", t.created_at.format("%Y-%m-%d %H:%M"));
        println!(
            "  Due:        {}",
            t.due_date.map_or_else(|| "-".to_string(), |d| d.to_string())
        );
        println!(
            "  Documents:  {}",
            t.documents.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        if !t.note.is_empty() {
            println!("  Note:       {}", t.note);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

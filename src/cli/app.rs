//! CLI definitions and entry point

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::commands;
use docreview::output::OutputMode;

/// docreview - Assign and track document validation tasks
#[derive(Parser, Debug)]
#[command(
    name = "docreview",
    version,
    about = "Assign and track document validation tasks",
    long_about = "Assign review tasks over sets of documents.\n\n\
                  Each task links documents, an assignee and a tag; the tag is applied\n\
                  to every linked document and seeds the task's due date."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Act as this user (username or id)
    #[arg(short, long, global = true, env = "DOCREVIEW_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .docreview.toml and an empty store
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Assign a validation task to selected documents
    Assign {
        #[command(subcommand)]
        action: AssignAction,
    },

    /// Inspect and update validation tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum AssignAction {
    /// Show the assignment form for the selected documents
    Begin {
        /// Selected document ids
        documents: Vec<u64>,
    },

    /// Create the task
    Apply {
        /// Selected document ids
        documents: Vec<u64>,

        /// Assignee (username or id)
        #[arg(short, long)]
        assignee: Option<String>,

        /// Tag (name or id)
        #[arg(short, long)]
        tag: Option<String>,

        /// Note for the assignee
        #[arg(short, long)]
        note: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List visible tasks
    List {
        /// Filter by status: pending, in_progress, done
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by assignee (username or id)
        #[arg(short, long)]
        assignee: Option<String>,

        /// Filter by creator (username or id)
        #[arg(short, long)]
        creator: Option<String>,

        /// Filter by tag (name or id)
        #[arg(short, long)]
        tag: Option<String>,

        /// Only tasks linked to this document
        #[arg(short, long)]
        document: Option<u64>,

        /// Only tasks due on or before this date (YYYY-MM-DD)
        #[arg(long)]
        due_before: Option<NaiveDate>,

        /// Search note, assignee and tag name
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a task
    Show {
        /// Task id
        id: u64,
    },

    /// Change a task's status
    Status {
        /// Task id
        id: u64,

        /// New status: pending, in_progress, done
        status: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Assign { action }) => {
            commands::assign(action, cli.user.as_deref(), output_mode)
        },
        Some(Command::Task { action }) => commands::task(action, cli.user.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("docreview v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docreview v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'docreview --help' for usage");
                println!("Run 'docreview init' to get started");
            }
            Ok(())
        },
    }
}

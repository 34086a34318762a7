//! Domain models for docreview
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ValidationTask`] - "Review these documents by this date"
//! - [`Document`] - A stored document and its tag set
//! - [`Tag`] - A label, optionally carrying a due date
//! - [`User`] - A directory user with role attributes

mod document;
mod ids;
mod tag;
mod task;
mod user;

pub use document::Document;
pub use ids::{DocumentId, TagId, TaskId, UserId};
pub use tag::Tag;
pub use task::{NewTask, TaskStatus, ValidationTask};
pub use user::User;

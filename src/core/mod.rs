//! Core domain logic for docreview
//!
//! This module contains the assignment workflow and its rules with no I/O
//! dependencies. All external interactions are abstracted through port
//! traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ValidationTask, Document, Tag, User)
//! - `services/` - Visibility policy, task repository, assignment workflow
//! - `ports/` - Trait definitions for the document, user, tag and task stores

pub mod models;
pub mod ports;
pub mod services;

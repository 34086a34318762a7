//! TOML-file backend
//!
//! Implements every port over a single `.docreview/store.toml` file.
//!
//! - [`store`] - File layout, reading and writing
//! - [`repository`] - Port implementations

pub mod repository;
pub mod store;

pub use repository::TomlBackend;
pub use store::{StoreFile, load_file, save_file};

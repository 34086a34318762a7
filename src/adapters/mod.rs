//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the ports:
//!
//! - `memory/` - In-process collections, for embedding and tests
//! - `toml/` - A single TOML store file, used by the CLI

pub mod memory;
pub mod toml;

pub use memory::MemoryBackend;
pub use toml::TomlBackend;

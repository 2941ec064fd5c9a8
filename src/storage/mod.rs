//! Storage layer module.
//!
//! This module provides trait-based storage abstraction allowing different backends
//! to be used without changing business logic.

pub mod factory;
pub mod file;
pub mod memory;
pub mod persisted;
pub mod traits;

pub use factory::create_storage;
pub use persisted::Persisted;
pub use traits::{HISTORY_KEY, KeyValueStorage, SETTINGS_KEY};

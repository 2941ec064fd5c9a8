//! Service layer module.
//!
//! Contains the password engine, the history and settings stores, and the
//! in-process session that drives them.

pub mod clipboard;
pub mod generator;
pub mod history;
pub mod password;
pub mod pool;
pub mod session;
pub mod settings;
pub mod strength;

pub use clipboard::{ClipboardSink, CopyOutcome, MemoryClipboard};
pub use history::HistoryStore;
pub use password::{GeneratedPassword, PasswordService};
pub use pool::CharacterPool;
pub use session::{CopyReport, GeneratorSession};
pub use settings::SettingsStore;
